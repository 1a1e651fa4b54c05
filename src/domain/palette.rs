// Dashboard colour palette (dark theme)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Background,
    Panel,
    Text,
    PrimaryBlue,
    PrimaryGreen,
    Red,
    Yellow,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Background => "#17171C",
            Color::Panel => "#1F1F25",
            Color::Text => "#E6E6E6",
            Color::PrimaryBlue => "#3B82F6",
            Color::PrimaryGreen => "#10B981",
            Color::Red => "#EF4444",
            Color::Yellow => "#F59E0B",
        }
    }
}
