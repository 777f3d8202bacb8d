use {
    crate::{
        js::{
            scan_env,
            Log,
            VecLog,
        },
        notify::Notify,
        state::{
            state,
            State_,
            STATE,
        },
    },
    rooting::{
        el,
        set_root,
    },
    std::{
        panic,
        rc::Rc,
    },
};

pub mod api;
pub mod js;
pub mod notify;
pub mod page_activities;
pub mod state;

pub fn main() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    let log1 = Rc::new(VecLog { log: Default::default() });
    let log = log1.clone() as Rc<dyn Log>;
    let env = scan_env(&log);
    let root = el("div");

    // Build app state
    STATE.with(|s| *s.borrow_mut() = Some(Rc::new(State_ {
        root: root.clone(),
        env: env,
        notify: Notify::new(),
        log: log.clone(),
        log1: log1,
    })));

    // Build the page; it schedules the initial activity fetch itself
    state().root.ref_push(page_activities::build());

    // Root and display
    set_root(vec![root]);
}
