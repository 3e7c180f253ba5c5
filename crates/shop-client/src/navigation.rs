//! Back navigation
//!
//! Web builds walk the browser history, native builds pop the route stack.
//! The platform is chosen once at startup and the button only sees the
//! `BackNavigator` capability.

/// Route every navigator starts on
pub const ROOT_ROUTE: &str = "/";

/// Something that can go back one step
pub trait BackNavigator: Send + Sync {
    fn go_back(&mut self);

    /// Route currently displayed
    fn current(&self) -> &str;
}

/// Browser session history with a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![ROOT_ROUTE.to_string()],
            cursor: 0,
        }
    }

    /// Visit `url`, discarding any forward entries
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Move back one entry; a no-op on the first entry
    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackNavigator for BrowserHistory {
    fn go_back(&mut self) {
        self.back();
    }

    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }
}

/// Native route stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    routes: Vec<String>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            routes: vec![ROOT_ROUTE.to_string()],
        }
    }

    pub fn push(&mut self, route: impl Into<String>) {
        self.routes.push(route.into());
    }

    /// Pop the top route unless it is the last one
    pub fn back(&mut self) {
        if self.routes.len() > 1 {
            self.routes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BackNavigator for NavigationStack {
    fn go_back(&mut self) {
        self.back();
    }

    fn current(&self) -> &str {
        self.routes.last().map_or(ROOT_ROUTE, String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    /// Platform of the running build
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Navigator matching `platform`, starting on the root route
pub fn navigator_for(platform: Platform) -> Box<dyn BackNavigator> {
    match platform {
        Platform::Web => Box::new(BrowserHistory::new()),
        Platform::Native => Box::new(NavigationStack::new()),
    }
}

/// Icon drawn inside the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub size: u16,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub padding: u16,
    pub border_radius: u16,
    pub background_color: &'static str,
    pub margin_left: Option<u16>,
}

impl ButtonStyle {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            padding: 5,
            border_radius: 30,
            background_color: "#F2F2F2",
            margin_left: match platform {
                Platform::Web => Some(20),
                Platform::Native => None,
            },
        }
    }
}

/// Round button that goes back one step when pressed
pub struct GoBackButton {
    navigator: Box<dyn BackNavigator>,
    style: ButtonStyle,
    icon: Icon,
}

impl GoBackButton {
    pub fn new(platform: Platform, navigator: Box<dyn BackNavigator>) -> Self {
        Self {
            navigator,
            style: ButtonStyle::for_platform(platform),
            icon: Icon {
                name: "chevron-left",
                size: 25,
                color: "black",
            },
        }
    }

    /// Button for `platform` with its default navigator
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform, navigator_for(platform))
    }

    pub fn press(&mut self) {
        self.navigator.go_back();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn navigator(&self) -> &dyn BackNavigator {
        self.navigator.as_ref()
    }
}

/// Button for the platform this build targets
impl Default for GoBackButton {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

impl std::fmt::Debug for GoBackButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoBackButton")
            .field("current", &self.navigator.current())
            .field("style", &self.style)
            .finish()
    }
}
