//! Home screen composition

/// Background colour of the home screen scroll view
pub const HOME_BACKGROUND: &str = "#e5ebf3";

/// Sections stacked on the home screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    NavBar,
    Category,
    Carousel,
    Products,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    sections: Vec<HomeSection>,
    header_shown: bool,
    background: &'static str,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            sections: vec![
                HomeSection::NavBar,
                HomeSection::Category,
                HomeSection::Carousel,
                HomeSection::Products,
            ],
            header_shown: false,
            background: HOME_BACKGROUND,
        }
    }

    pub fn sections(&self) -> &[HomeSection] {
        &self.sections
    }

    /// The screen draws its own nav bar, so the navigator header is hidden
    pub fn header_shown(&self) -> bool {
        self.header_shown
    }

    pub fn background(&self) -> &str {
        self.background
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
