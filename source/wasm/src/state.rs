use {
    crate::{
        js::{
            Env,
            Log,
            VecLog,
        },
        notify::Notify,
    },
    rooting::El,
    std::{
        cell::RefCell,
        future::Future,
        rc::Rc,
    },
    wasm_bindgen_futures::spawn_local,
};

pub struct State_ {
    pub root: El,
    pub env: Env,
    pub notify: Rc<Notify>,
    pub log: Rc<dyn Log>,
    pub log1: Rc<VecLog>,
}

thread_local!{
    pub static STATE: RefCell<Option<Rc<State_>>> = RefCell::new(None);
}

pub fn state() -> Rc<State_> {
    return STATE.with(|x| x.borrow().clone()).unwrap();
}

pub fn spawn_log(message: &'static str, f: impl Future<Output = Result<(), String>> + 'static) {
    spawn_local(async move {
        if let Err(e) = f.await {
            state().log.log(&format!("Error in background task [{}]: {}", message, e));
        }
    });
}
