#![forbid(unsafe_code)]

//! Scoped host listener sets.
//!
//! A [`ListenerSet`] is the Rust side of the six DOM listeners a snap surface
//! needs: press listeners on the draggable element, and move/release
//! listeners on the window. Each set captures one [`ZoneGrid`] snapshot.
//! When the viewport changes the set is dropped and a new one acquired, so a
//! handler can never see bounds computed for an old viewport.
//!
//! The adapter never touches the DOM itself. Acquiring and dropping a set
//! queues [`ListenerCommand`]s that the JS host drains and applies with
//! `addEventListener()` / `removeEventListener()`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use zonesnap_core::debug;
use zonesnap_core::geometry::Viewport;
use zonesnap_core::zone::ZoneGrid;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The draggable box element.
    Surface,
    /// The whole window.
    Window,
}

/// DOM event type a listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    TouchStart,
    MouseDown,
    TouchMove,
    MouseMove,
    TouchEnd,
    MouseUp,
}

impl ListenerKind {
    /// DOM event name.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::MouseDown => "mousedown",
            Self::TouchMove => "touchmove",
            Self::MouseMove => "mousemove",
            Self::TouchEnd => "touchend",
            Self::MouseUp => "mouseup",
        }
    }

    /// Target the listener belongs on.
    #[must_use]
    pub const fn target(self) -> ListenerTarget {
        match self {
            Self::TouchStart | Self::MouseDown => ListenerTarget::Surface,
            _ => ListenerTarget::Window,
        }
    }
}

/// The six listeners acquired for every viewport snapshot.
pub const LISTENER_KINDS: [ListenerKind; 6] = [
    ListenerKind::TouchStart,
    ListenerKind::MouseDown,
    ListenerKind::TouchMove,
    ListenerKind::MouseMove,
    ListenerKind::TouchEnd,
    ListenerKind::MouseUp,
];

/// Host command emitted when a listener set is acquired or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Attach {
        generation: u64,
        kind: ListenerKind,
        target: ListenerTarget,
    },
    Detach {
        generation: u64,
        kind: ListenerKind,
        target: ListenerTarget,
    },
}

impl ListenerCommand {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Attach { generation, .. } | Self::Detach { generation, .. } => *generation,
        }
    }
}

/// Queue of pending host commands shared between a surface and its sets.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    inner: Rc<RefCell<VecDeque<ListenerCommand>>>,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, command: ListenerCommand) {
        self.inner.borrow_mut().push_back(command);
    }

    /// Take every pending command, oldest first.
    pub fn drain(&self) -> Vec<ListenerCommand> {
        self.inner.borrow_mut().drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// Listeners bound to one viewport snapshot. Dropping the set detaches them.
#[derive(Debug)]
pub struct ListenerSet {
    generation: u64,
    grid: ZoneGrid,
    queue: CommandQueue,
}

impl ListenerSet {
    /// Attach all listeners for `viewport`.
    pub(crate) fn acquire(generation: u64, viewport: Viewport, queue: &CommandQueue) -> Self {
        for kind in LISTENER_KINDS {
            queue.push(ListenerCommand::Attach {
                generation,
                kind,
                target: kind.target(),
            });
        }
        debug!(
            generation,
            width = viewport.width,
            height = viewport.height,
            "listeners acquired"
        );
        Self {
            generation,
            grid: ZoneGrid::from_viewport(viewport),
            queue: queue.clone(),
        }
    }

    /// Monotonic id of this acquisition.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Hinge and quartile bounds captured at acquisition.
    #[must_use]
    pub const fn grid(&self) -> &ZoneGrid {
        &self.grid
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.grid.viewport
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for kind in LISTENER_KINDS {
            self.queue.push(ListenerCommand::Detach {
                generation: self.generation,
                kind,
                target: kind.target(),
            });
        }
        debug!(generation = self.generation, "listeners released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_attaches_six_listeners() {
        let queue = CommandQueue::new();
        let set = ListenerSet::acquire(1, Viewport::new(1000.0, 800.0), &queue);
        let commands = queue.drain();
        assert_eq!(commands.len(), 6);
        assert!(commands
            .iter()
            .all(|c| matches!(c, ListenerCommand::Attach { generation: 1, .. })));
        assert_eq!(set.grid().hinge_y, 400.0);
        assert_eq!(set.viewport(), Viewport::new(1000.0, 800.0));
    }

    #[test]
    fn drop_detaches_same_generation() {
        let queue = CommandQueue::new();
        let set = ListenerSet::acquire(7, Viewport::new(10.0, 10.0), &queue);
        queue.drain();
        drop(set);
        let commands = queue.drain();
        assert_eq!(commands.len(), 6);
        assert!(commands
            .iter()
            .all(|c| matches!(c, ListenerCommand::Detach { generation: 7, .. })));
        assert!(queue.is_empty());
    }

    #[test]
    fn press_listeners_live_on_surface() {
        assert_eq!(ListenerKind::MouseDown.target(), ListenerTarget::Surface);
        assert_eq!(ListenerKind::TouchStart.target(), ListenerTarget::Surface);
        assert_eq!(ListenerKind::MouseMove.target(), ListenerTarget::Window);
        assert_eq!(ListenerKind::TouchEnd.dom_name(), "touchend");
    }
}
