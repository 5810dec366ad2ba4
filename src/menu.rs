use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "display:block");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Tag the body so the stylesheet can switch to the touch-friendly layout.
#[inline]
pub fn enable_mobile_mode(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("mobile-mode");
    }
}
