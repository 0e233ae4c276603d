use strum_macros::{Display, EnumIter, EnumString};
use yewdux::Store;

/// Sort orders accepted by the board list endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BoardOrder {
    /// Newest posts first.
    #[default]
    Recent,
    /// Most-liked posts first.
    Like,
}

/// Keyword/order filter for the board list.
///
/// Lives in the store rather than page state so the filter survives
/// navigating into a board and back.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct BoardFilterStore {
    /// Search keyword; empty matches everything.
    pub keyword: String,
    /// Requested sort order.
    pub order: BoardOrder,
}

impl BoardFilterStore {
    /// Replace the keyword, leaving the order untouched.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Replace the order, leaving the keyword untouched.
    pub fn set_order(&mut self, order: BoardOrder) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use yewdux::Dispatch;

    /// Default filter is an empty keyword sorted by recency
    #[test]
    fn test_default_filter() {
        let filter = BoardFilterStore::default();
        assert_eq!(filter.keyword, "");
        assert_eq!(filter.order, BoardOrder::Recent);
    }

    /// Each setter touches only its own field
    #[test]
    fn test_setters_are_independent() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<BoardFilterStore>::new(&cx);

        dispatch.reduce_mut(|filter| filter.set_keyword("retro"));
        assert_eq!(dispatch.get().keyword, "retro");
        assert_eq!(dispatch.get().order, BoardOrder::Recent);

        dispatch.reduce_mut(|filter| filter.set_order(BoardOrder::Like));
        assert_eq!(dispatch.get().keyword, "retro");
        assert_eq!(dispatch.get().order, BoardOrder::Like);
    }

    /// Orders round-trip through their query-string names
    #[test]
    fn test_order_string_forms() {
        assert_eq!(BoardOrder::Recent.to_string(), "recent");
        assert_eq!(BoardOrder::Like.to_string(), "like");
        assert_eq!(BoardOrder::from_str("like"), Ok(BoardOrder::Like));
        assert!(BoardOrder::from_str("oldest").is_err());
    }
}
