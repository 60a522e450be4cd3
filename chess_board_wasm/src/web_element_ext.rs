use crate::rust_error;
use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn with_text_content(self, text: &str) -> web_sys::Element;
    fn with_attribute(self, name: &str, value: &str) -> JsResult<web_sys::Element>;
    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element>;

    fn remove_all_children(&self);
    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element>;
}

impl WebElementExt for web_sys::Element {
    fn with_text_content(self, text: &str) -> web_sys::Element {
        self.set_text_content(Some(text));
        self
    }

    fn with_attribute(self, name: &str, value: &str) -> JsResult<web_sys::Element> {
        self.set_attribute(name, value)?;
        Ok(self)
    }

    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element> {
        for class in classes {
            self.class_list().add_1(class)?;
        }
        Ok(self)
    }

    fn remove_all_children(&self) { self.replace_children_with_node_0() }

    // Creates the child in the element's own document, so that detached containers work too.
    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        let document = self
            .owner_document()
            .ok_or_else(|| rust_error!("Element <{}> has no owner document", self.tag_name()))?;
        let node = document.create_element(local_name)?;
        self.append_child(&node)?;
        Ok(node)
    }
}
