use crate::error::{DispatchError, DispatchResult};
use crate::messaging::RawMessage;
use crate::params::Params;
use crate::parsers::Parser;

/// Ordered, immutable batch of parsed params.
///
/// `entries[i]` always derives from the i-th raw message of the batch it
/// was built from. A parse failure on any message fails the whole build.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsBatch {
    entries: Vec<Params>,
}

impl ParamsBatch {
    /// Apply `parser` to every raw message, in order.
    pub fn build(raw_messages: &[RawMessage], parser: &dyn Parser) -> DispatchResult<Self> {
        let mut entries = Vec::with_capacity(raw_messages.len());
        for message in raw_messages {
            let value = parser
                .parse(message)
                .map_err(|source| DispatchError::Parse {
                    partition: message.partition,
                    offset: message.offset,
                    message: source.to_string(),
                })?;
            entries.push(Params::new(value, message));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Params> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&Params> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Params> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ParamsBatch {
    type Item = &'a Params;
    type IntoIter = std::slice::Iter<'a, Params>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
