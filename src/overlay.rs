use crate::constants::{CLASS_HIDDEN, ID_LOADING_SCREEN};
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_LOADING_SCREEN) {
        _ = el.class_list().remove_1(CLASS_HIDDEN);
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ID_LOADING_SCREEN) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
    }
}
