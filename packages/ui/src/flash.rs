//! One-shot messages handed from a form to the page it navigates to.
//!
//! The create forms [`put`](FlashBox::put) a message right before
//! navigating; the destination view [`take`](FlashBox::take)s it on mount.
//! Reading clears it, so a refresh or a later visit never shows it again.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::toast::Toast;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    message: Option<String>,
}

impl Flash {
    pub fn put(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn take(&mut self) -> Option<String> {
        self.message.take()
    }
}

/// Shared [`Flash`] slot provided at the app root. Not reactive: nothing
/// renders from it directly.
#[derive(Clone, Default)]
pub struct FlashBox(Rc<RefCell<Flash>>);

impl FlashBox {
    pub fn put(&self, message: impl Into<String>) {
        self.0.borrow_mut().put(message);
    }

    pub fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }
}

pub fn use_flash() -> FlashBox {
    use_context::<FlashBox>()
}

/// Toast state for a view, seeded with the pending flash message (if any).
pub fn use_flash_toast() -> Signal<Option<Toast>> {
    let flash = use_flash();
    use_signal(move || flash.take().map(Toast::success))
}
