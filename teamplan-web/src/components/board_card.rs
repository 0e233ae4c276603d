use shared::models::Board;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct BoardCardProps {
    /// The post being rendered.
    pub board: Board,
}

/// Card shown in the board list, linking to the post.
#[function_component(BoardCard)]
pub fn board_card(props: &BoardCardProps) -> Html {
    let board = &props.board;

    html! {
        <Link<MainRoute> to={MainRoute::BoardDetail { board_id: board.id.to_string() }}>
            <div class="card bg-base-200 shadow hover:shadow-lg transition-shadow">
                <div class="card-body">
                    <h2 class="card-title">{ &board.title }</h2>
                    <p class="text-sm opacity-70">
                        { format!("{} · {}", board.author, board.created_at.format("%Y-%m-%d")) }
                    </p>
                    <div class="flex gap-4 text-sm">
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsSolidHeart} class="h-4 w-4" />
                            { board.like_count }
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon
                                icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight}
                                class="h-4 w-4"
                            />
                            { board.comment_count }
                        </span>
                    </div>
                </div>
            </div>
        </Link<MainRoute>>
    }
}
