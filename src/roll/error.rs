use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("too many aces rolled (limit is {0})")]
    TooManyAces(usize),
}
