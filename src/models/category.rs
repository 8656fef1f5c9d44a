#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Health,
    Shopping,
    Salary,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    pub(crate) fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "food" => Self::Food,
            "transport" | "transportation" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "utilities" | "utility" => Self::Utilities,
            "health" => Self::Health,
            "shopping" => Self::Shopping,
            "salary" | "income" => Self::Salary,
            _ => Self::Other,
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::Health,
            Self::Shopping,
            Self::Salary,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
