#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BemError {
    #[error("Invalid naming rules: {0}")]
    Config(String),
    #[error("No block or element name found in classes: {}", classes.join(", "))]
    Parse { classes: Vec<String> },
}
