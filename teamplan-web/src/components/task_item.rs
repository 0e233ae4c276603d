use shared::models::Task;
use uuid::Uuid;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
    /// The task being rendered.
    pub task: Task,
    /// Emits the task id and the requested done state.
    pub on_toggle: Callback<(Uuid, bool)>,
    /// Emits the task id to delete.
    pub on_delete: Callback<Uuid>,
}

/// One row in a task list: checkbox, title, recurrence badges, delete.
#[function_component(TaskItem)]
pub fn task_item(props: &TaskItemProps) -> Html {
    let task = &props.task;

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = task.id;
        let done = task.done;
        Callback::from(move |_: Event| on_toggle.emit((id, !done)))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = task.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <li class="flex items-center gap-3 py-2">
            <input
                type="checkbox"
                class="checkbox checkbox-sm"
                checked={task.done}
                onchange={on_toggle}
            />
            <span class={classes!("flex-grow", task.done.then_some("line-through opacity-60"))}>
                { &task.title }
            </span>
            if task.is_recurring() {
                <div class="flex gap-1">
                    { for task.repeat_days.iter().map(|day| html! {
                        <span class="badge badge-outline badge-xs">{ day.short_label() }</span>
                    }) }
                </div>
            }
            <button class="btn btn-ghost btn-xs" onclick={on_delete} aria-label="Delete task">
                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-4 w-4" />
            </button>
        </li>
    }
}
