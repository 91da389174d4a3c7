use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use crate::config::overlay::{MODAL_ROOT_ID, SHEET_ROOT_ID};

/// Process-wide mount counts for the shared portal roots.
pub static PORTALS: LazyLock<PortalRegistry> = LazyLock::new(PortalRegistry::default);

static INSTANCES: AtomicUsize = AtomicUsize::new(0);

/// A number not handed to any other overlay instance in this process.
pub fn next_instance() -> usize {
    INSTANCES.fetch_add(1, Ordering::Relaxed)
}

/// Each kind of overlay renders into its own shared root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortalKind {
    Modal,
    BottomSheet,
}

impl PortalKind {
    pub fn root_id(self) -> &'static str {
        match self {
            PortalKind::Modal => MODAL_ROOT_ID,
            PortalKind::BottomSheet => SHEET_ROOT_ID,
        }
    }

    /// Element id of the title of overlay `instance`, for `aria-labelledby`.
    pub fn title_id(self, instance: usize) -> String {
        let prefix = match self {
            PortalKind::Modal => "modal",
            PortalKind::BottomSheet => "sheet",
        };
        format!("{prefix}-title-{instance}")
    }

    /// Inline style of the root container. The root never takes pointer
    /// events itself; overlay content turns them back on.
    pub fn root_style(self) -> &'static str {
        match self {
            PortalKind::Modal => {
                "position: fixed; top: 0; left: 0; right: 0; bottom: 0; pointer-events: none; z-index: 9999;"
            }
            PortalKind::BottomSheet => {
                "position: fixed; top: 0; left: 20%; right: 20%; bottom: 0; pointer-events: none; z-index: 9999;"
            }
        }
    }
}

/// Owner of the actual root nodes (the document, or a fake in tests).
pub trait PortalHost {
    type Root: Clone;
    type Error: std::fmt::Display;

    fn find_root(&self, kind: PortalKind) -> Option<Self::Root>;
    fn create_root(&self, kind: PortalKind) -> Result<Self::Root, Self::Error>;
    fn remove_root(&self, kind: PortalKind) -> Result<(), Self::Error>;
}

/// Reference counts of attached overlays per [`PortalKind`].
///
/// The root for a kind is created by the first `attach` and removed by the
/// `detach` that brings its count back to zero, so overlays of the same kind
/// never remove a container another instance still renders into.
#[derive(Debug, Default)]
pub struct PortalRegistry {
    mounts: DashMap<PortalKind, usize>,
}

impl PortalRegistry {
    pub fn attach<H: PortalHost>(&self, kind: PortalKind, host: &H) -> Result<H::Root, H::Error> {
        let mut count = self.mounts.entry(kind).or_insert(0);
        let root = match host.find_root(kind) {
            Some(root) => root,
            None => {
                log::debug!("creating portal root #{}", kind.root_id());
                host.create_root(kind)?
            }
        };
        *count += 1;
        Ok(root)
    }

    pub fn detach<H: PortalHost>(&self, kind: PortalKind, host: &H) -> Result<(), H::Error> {
        let remaining = match self.mounts.get_mut(&kind) {
            Some(mut count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => return Ok(()),
        };
        if remaining == 0 && self.mounts.remove_if(&kind, |_, c| *c == 0).is_some() {
            log::debug!("removing portal root #{}", kind.root_id());
            host.remove_root(kind)?;
        }
        Ok(())
    }

    pub fn mount_count(&self, kind: PortalKind) -> usize {
        self.mounts.get(&kind).map(|c| *c).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDocument {
        roots: RefCell<HashMap<&'static str, u32>>,
        created: RefCell<u32>,
        fail_create: bool,
    }

    impl PortalHost for FakeDocument {
        type Root = u32;
        type Error = String;

        fn find_root(&self, kind: PortalKind) -> Option<u32> {
            self.roots.borrow().get(kind.root_id()).copied()
        }

        fn create_root(&self, kind: PortalKind) -> Result<u32, String> {
            if self.fail_create {
                return Err("no body".to_string());
            }
            let mut created = self.created.borrow_mut();
            *created += 1;
            self.roots.borrow_mut().insert(kind.root_id(), *created);
            Ok(*created)
        }

        fn remove_root(&self, kind: PortalKind) -> Result<(), String> {
            self.roots
                .borrow_mut()
                .remove(kind.root_id())
                .map(|_| ())
                .ok_or_else(|| format!("{} missing", kind.root_id()))
        }
    }

    #[test]
    fn test_title_ids_differ_per_instance() {
        let (a, b) = (next_instance(), next_instance());
        assert_ne!(a, b);
        assert_ne!(PortalKind::BottomSheet.title_id(a), PortalKind::BottomSheet.title_id(b));
        assert_ne!(PortalKind::Modal.title_id(a), PortalKind::BottomSheet.title_id(a));
        assert_eq!(PortalKind::Modal.title_id(7), "modal-title-7");
    }

    #[test]
    fn test_root_created_once_per_kind() {
        let registry = PortalRegistry::default();
        let doc = FakeDocument::default();

        let a = registry.attach(PortalKind::Modal, &doc).unwrap();
        let b = registry.attach(PortalKind::Modal, &doc).unwrap();
        assert_eq!(a, b);
        assert_eq!(*doc.created.borrow(), 1);
        assert_eq!(registry.mount_count(PortalKind::Modal), 2);

        let sheet = registry.attach(PortalKind::BottomSheet, &doc).unwrap();
        assert_ne!(sheet, a);
        assert_eq!(doc.roots.borrow().len(), 2);
    }

    #[test]
    fn test_root_removed_only_after_last_detach() {
        let registry = PortalRegistry::default();
        let doc = FakeDocument::default();
        registry.attach(PortalKind::BottomSheet, &doc).unwrap();
        registry.attach(PortalKind::BottomSheet, &doc).unwrap();

        registry.detach(PortalKind::BottomSheet, &doc).unwrap();
        assert!(doc.find_root(PortalKind::BottomSheet).is_some());
        assert_eq!(registry.mount_count(PortalKind::BottomSheet), 1);

        registry.detach(PortalKind::BottomSheet, &doc).unwrap();
        assert!(doc.find_root(PortalKind::BottomSheet).is_none());
        assert_eq!(registry.mount_count(PortalKind::BottomSheet), 0);

        // extra detaches are harmless
        registry.detach(PortalKind::BottomSheet, &doc).unwrap();
    }

    #[test]
    fn test_root_recreated_after_removal() {
        let registry = PortalRegistry::default();
        let doc = FakeDocument::default();
        registry.attach(PortalKind::Modal, &doc).unwrap();
        registry.detach(PortalKind::Modal, &doc).unwrap();
        let again = registry.attach(PortalKind::Modal, &doc).unwrap();
        assert_eq!(again, 2);
    }

    #[test]
    fn test_failed_create_does_not_count() {
        let registry = PortalRegistry::default();
        let doc = FakeDocument {
            fail_create: true,
            ..Default::default()
        };
        assert!(registry.attach(PortalKind::Modal, &doc).is_err());
        assert_eq!(registry.mount_count(PortalKind::Modal), 0);
    }

    #[test]
    fn test_kinds_have_distinct_roots() {
        assert_eq!(PortalKind::Modal.root_id(), "modal-root");
        assert_eq!(PortalKind::BottomSheet.root_id(), "bottomsheet-root");
        assert!(PortalKind::BottomSheet.root_style().contains("left: 20%"));
        assert!(PortalKind::Modal.root_style().contains("pointer-events: none"));
    }
}
