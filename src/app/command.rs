#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Push the search box's new value to the page, firing an input event.
    SetSearchValue(String),
}
