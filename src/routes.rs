use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// The site's fixed set of logical pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Schedule,
    Team,
    About,
}

/// Ordered candidates; first match wins.
const ROUTES: &[(&str, PageId)] = &[
    ("/schedule", PageId::Schedule),
    ("/team", PageId::Team),
    ("/about", PageId::About),
];

impl PageId {
    /// Resolves a path to a page. Matching is case-sensitive and
    /// boundary-aware: the prefix must be followed by `/` or the end of the
    /// path, so `/schedule/games` is `Schedule` but `/teamwork` is not
    /// `Team`. Anything unmatched, including `/`, is `Home`.
    pub fn resolve(path: &str) -> PageId {
        for (prefix, page) in ROUTES {
            if let Some(rest) = path.strip_prefix(prefix) {
                if rest.is_empty() || rest.starts_with('/') {
                    return *page;
                }
            }
        }
        PageId::Home
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Welcome to Kenny Sports!",
            PageId::Schedule => "Full Schedule",
            PageId::Team => "Meet the Team!",
            PageId::About => "About Kenny Sports",
        }
    }
}

/// A cloneable sender for navigation intents. Components request a path
/// change through this and never touch history themselves.
#[derive(Debug, Clone)]
pub struct NavigationHandle(Sender<String>);

impl NavigationHandle {
    pub fn request(&self, path: impl Into<String>) {
        // A dropped router means there is nobody left to navigate.
        let _ = self.0.send(path.into());
    }
}

/// Owns the current path and the navigation history. `navigate` is the only
/// operation that pushes a history entry; `back` and `forward` replay
/// existing entries the way the environment's back/forward signal does,
/// without pushing. Synchronous throughout; nothing here blocks.
#[derive(Debug)]
pub struct Router {
    history: Vec<String>,
    cursor: usize,
    intents: Receiver<String>,
    handle: NavigationHandle,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, rx) = channel();
        Self {
            history: vec![initial.into()],
            cursor: 0,
            intents: rx,
            handle: NavigationHandle(tx),
        }
    }

    pub fn path(&self) -> &str {
        &self.history[self.cursor]
    }

    pub fn page(&self) -> PageId {
        PageId::resolve(self.path())
    }

    pub fn handle(&self) -> NavigationHandle {
        self.handle.clone()
    }

    /// Makes `path` current and pushes it onto the history, dropping any
    /// forward entries left over from earlier `back` calls.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.into());
        self.cursor += 1;
    }

    /// Back/forward signals update the current path without pushing, so
    /// replaying history can never grow it.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.path())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.path())
    }

    /// Drains pending navigation intents in arrival order, performing each
    /// one. Returns how many were handled.
    pub fn process_intents(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.intents.try_recv() {
                Ok(path) => {
                    self.navigate(path);
                    handled += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return handled,
            }
        }
    }
}
