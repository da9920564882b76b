//! Page shell view selector.

/// Sentinel id the history view sends when the user asks to upload instead.
pub const UPLOAD_SENTINEL_ID: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    History,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Upload, Tab::History];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "Upload Resume",
            Tab::History => "History",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Upload => "📤",
            Tab::History => "🕘",
        }
    }
}

/// Reacts to a resume being selected from the history view.
///
/// Only the upload sentinel changes the active tab.
pub fn select_resume(current: Tab, resume_id: u32) -> Tab {
    if resume_id == UPLOAD_SENTINEL_ID {
        Tab::Upload
    } else {
        current
    }
}

/// The tab to switch to, or `None` when `requested` is already active.
///
/// Re-selecting the active tab must not remount its view.
pub fn change_tab(current: Tab, requested: Tab) -> Option<Tab> {
    (current != requested).then_some(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::*;

    #[test]
    fn test_upload_sentinel_switches_to_upload() {
        assert_eq!(select_resume(Tab::History, UPLOAD_SENTINEL_ID), Tab::Upload);
    }

    #[test]
    fn test_other_ids_keep_current_tab() {
        assert_eq!(select_resume(Tab::History, 2), Tab::History);
        assert_eq!(select_resume(Tab::Upload, 3), Tab::Upload);
    }

    #[test]
    fn test_default_tab_is_upload() {
        assert_eq!(Tab::default(), Tab::Upload);
        assert_eq!(Tab::ALL.len(), 2);
    }

    #[test]
    fn test_change_tab_ignores_active_tab() {
        assert_eq!(change_tab(Tab::Upload, Tab::Upload), None);
        assert_eq!(change_tab(Tab::History, Tab::History), None);
        assert_eq!(change_tab(Tab::Upload, Tab::History), Some(Tab::History));
        assert_eq!(change_tab(Tab::History, select_resume(Tab::History, 0)), Some(Tab::Upload));
    }

    #[test]
    fn test_reselecting_active_tab_keeps_view_mounted() {
        let runtime = create_runtime();
        let (active, set_active) = create_signal(Tab::Upload);
        let shown = create_memo(move |_| active.get());

        let mounts = Rc::new(Cell::new(0));
        let teardowns = Rc::new(Cell::new(0));
        {
            let mounts = mounts.clone();
            let teardowns = teardowns.clone();
            create_isomorphic_effect(move |_| {
                shown.get();
                mounts.set(mounts.get() + 1);
                let teardowns = teardowns.clone();
                on_cleanup(move || teardowns.set(teardowns.get() + 1));
            });
        }
        assert_eq!(mounts.get(), 1);

        // Raw `set` always notifies; the memo absorbs the unchanged value
        set_active.set(Tab::Upload);
        assert_eq!((mounts.get(), teardowns.get()), (1, 0));

        if let Some(next) = change_tab(active.get_untracked(), Tab::History) {
            set_active.set(next);
        }
        assert_eq!((mounts.get(), teardowns.get()), (2, 1));

        runtime.dispose();
    }
}
