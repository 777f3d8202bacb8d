use {
    gloo::utils::window,
    std::{
        cell::RefCell,
        rc::Rc,
    },
    wasm_bindgen::JsValue,
    web_sys::console,
};

pub trait Log {
    fn log(&self, text: &str);
}

/// Mirrors every entry to the browser console and retains it for debugging.
pub struct VecLog {
    pub log: RefCell<Vec<String>>,
}

impl Log for VecLog {
    fn log(&self, text: &str) {
        console::log_1(&JsValue::from(text));
        self.log.borrow_mut().push(text.to_string());
    }
}

#[derive(Clone)]
pub struct Env {
    pub base_url: String,
}

pub fn scan_env(log: &Rc<dyn Log>) -> Env {
    let base_url = match window().location().origin() {
        Ok(o) => o,
        Err(e) => {
            log.log(&format!("Error reading window origin, falling back to relative urls: {:?}", e.as_string()));
            String::new()
        },
    };
    return Env { base_url: base_url };
}
