use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use newsdesk_core::{Locale, ThemeMode};

use super::persistence::{load_preferences, save_preferences, SavedPreferences};

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A single user preference with change notification.
pub(crate) struct PreferenceStore<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: Clone + PartialEq> PreferenceStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Stores `value` and notifies subscribers. Setting the current value is a no-op.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
        true
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

/// Locale and theme stores backed by one preferences file.
pub(crate) struct UserPreferences {
    pub locale: PreferenceStore<Locale>,
    pub theme: PreferenceStore<ThemeMode>,
    redraw: Rc<Cell<bool>>,
}

impl UserPreferences {
    pub fn persisted_at(path: PathBuf) -> Self {
        let saved = Rc::new(RefCell::new(load_preferences(&path)));
        let redraw = Rc::new(Cell::new(false));
        let path = Rc::new(path);

        let mut locale = PreferenceStore::new(saved.borrow().locale);
        locale.subscribe(persist_on_change(
            saved.clone(),
            path.clone(),
            redraw.clone(),
            |saved: &mut SavedPreferences, value: &Locale| saved.locale = *value,
        ));

        let mut theme = PreferenceStore::new(saved.borrow().theme);
        theme.subscribe(persist_on_change(
            saved,
            path,
            redraw.clone(),
            |saved: &mut SavedPreferences, value: &ThemeMode| saved.theme = *value,
        ));

        Self {
            locale,
            theme,
            redraw,
        }
    }

    /// True once after any preference changed.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }
}

fn persist_on_change<T: 'static>(
    saved: Rc<RefCell<SavedPreferences>>,
    path: Rc<PathBuf>,
    redraw: Rc<Cell<bool>>,
    apply: impl Fn(&mut SavedPreferences, &T) + 'static,
) -> impl FnMut(&T) + 'static {
    move |value: &T| {
        apply(&mut saved.borrow_mut(), value);
        save_preferences(&path, &saved.borrow());
        redraw.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PreferenceStore::new(Locale::En);
        let sink = seen.clone();
        store.subscribe(move |value: &Locale| sink.borrow_mut().push(*value));

        assert!(!store.set(Locale::En));
        assert!(store.set(Locale::Fr));
        assert_eq!(store.get(), Locale::Fr);
        assert_eq!(*seen.borrow(), vec![Locale::Fr]);
    }

    #[test]
    fn changes_persist_and_request_redraw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ron");

        let mut prefs = UserPreferences::persisted_at(path.clone());
        assert_eq!(prefs.locale.get(), Locale::En);
        assert!(!prefs.take_redraw());

        prefs.locale.set(Locale::Fr);
        prefs.theme.set(ThemeMode::Dark);
        assert!(prefs.take_redraw());
        assert!(!prefs.take_redraw());

        let reloaded = UserPreferences::persisted_at(path);
        assert_eq!(reloaded.locale.get(), Locale::Fr);
        assert_eq!(reloaded.theme.get(), ThemeMode::Dark);
    }
}
