use {
    gloo::timers::callback::Timeout,
    rooting::{
        el,
        El,
    },
    std::{
        cell::RefCell,
        rc::Rc,
    },
};

const HIDE_DELAY_MS: u32 = 5000;

pub enum NotifyKind {
    Success,
    Error,
}

/// The shared status message line. Owns its element and the pending hide
/// timer; showing a new message replaces the stored timer, cancelling the old
/// one, so a stale timer can never hide a newer message.
pub struct Notify {
    root: El,
    hide: RefCell<Option<Timeout>>,
}

impl Notify {
    pub fn new() -> Rc<Notify> {
        return Rc::new(Notify {
            root: el("div").attr("id", "message").attr("class", "message hidden"),
            hide: RefCell::new(None),
        });
    }

    pub fn root(&self) -> El {
        return self.root.clone();
    }

    pub fn show(&self, kind: NotifyKind, text: &str) {
        self.root.ref_text(text);
        self.root.ref_attr("class", match kind {
            NotifyKind::Success => "message success",
            NotifyKind::Error => "message error",
        });
        *self.hide.borrow_mut() = Some(Timeout::new(HIDE_DELAY_MS, {
            let root = self.root.clone();
            move || {
                root.ref_modify_classes(&[("hidden", true)]);
            }
        }));
    }
}
