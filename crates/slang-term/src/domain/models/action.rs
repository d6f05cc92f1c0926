#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Query(String),
}
