use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("Cannot navigate an empty sequence: {collection}")]
    EmptySequence { collection: String },
}

/// A fixed, non-empty sequence of items with a cursor that wraps around
/// at both ends.
///
/// The cursor is a position, not a value, so repeated items are visited
/// in order like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigator {
    owner_name: String,
    collection_name: String,
    items: Vec<String>,
    index: usize,
}

impl Navigator {
    /// Build a navigator positioned on the first item.
    pub fn new<I, S>(
        owner_name: impl Into<String>,
        collection_name: impl Into<String>,
        items: I,
    ) -> Result<Self, NavigatorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collection_name = collection_name.into();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(NavigatorError::EmptySequence {
                collection: collection_name,
            });
        }

        Ok(Self {
            owner_name: owner_name.into(),
            collection_name,
            items,
            index: 0,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.items[self.index]
    }

    /// Move to the next item, wrapping from the last to the first.
    pub fn advance(&mut self) -> &str {
        self.index = if self.index + 1 == self.items.len() {
            0
        } else {
            self.index + 1
        };
        self.log_move("advance");
        self.current()
    }

    /// Move to the previous item, wrapping from the first to the last.
    pub fn retreat(&mut self) -> &str {
        self.index = if self.index == 0 {
            self.items.len() - 1
        } else {
            self.index - 1
        };
        self.log_move("retreat");
        self.current()
    }

    fn log_move(&self, direction: &'static str) {
        debug!(
            collection = %self.collection_name,
            direction,
            index = self.index,
            item = %self.current(),
            "cursor moved"
        );
    }
}

/// Renders as "owner - collection: current item".
impl std::fmt::Display for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.owner_name,
            self.collection_name,
            self.current()
        )
    }
}
