use chess_board::{BOARD_CONTAINER_ID, BoardView, LabelStrip, STATUS_CONTAINER_ID, SquareView};
use wasm_bindgen::JsValue;

use crate::web_document::WebDocument;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


// Board page backed by real DOM elements. The containers are passed in explicitly; nothing is
// looked up by id after construction.
pub struct DomBoardView {
    rank_labels: web_sys::Element,
    file_labels: web_sys::Element,
    board: web_sys::Element,
    status: web_sys::Element,
}

impl DomBoardView {
    pub fn new(
        rank_labels: web_sys::Element, file_labels: web_sys::Element, board: web_sys::Element,
        status: web_sys::Element,
    ) -> Self {
        DomBoardView { rank_labels, file_labels, board, status }
    }

    pub fn from_document(document: &WebDocument) -> JsResult<Self> {
        Ok(Self::new(
            document.get_existing_element_by_id(LabelStrip::Ranks.container_id())?,
            document.get_existing_element_by_id(LabelStrip::Files.container_id())?,
            document.get_existing_element_by_id(BOARD_CONTAINER_ID)?,
            document.get_existing_element_by_id(STATUS_CONTAINER_ID)?,
        ))
    }

    fn strip(&self, strip: LabelStrip) -> &web_sys::Element {
        match strip {
            LabelStrip::Ranks => &self.rank_labels,
            LabelStrip::Files => &self.file_labels,
        }
    }
}

impl BoardView for DomBoardView {
    type Error = JsValue;

    fn clear_labels(&mut self, strip: LabelStrip) -> JsResult<()> {
        self.strip(strip).remove_all_children();
        Ok(())
    }

    fn append_label(&mut self, strip: LabelStrip, text: &str) -> JsResult<()> {
        self.strip(strip)
            .append_new_element("div")?
            .with_classes([strip.class_name()])?
            .with_text_content(text);
        Ok(())
    }

    fn clear_board(&mut self) -> JsResult<()> {
        self.board.remove_all_children();
        Ok(())
    }

    fn append_square(&mut self, square: &SquareView) -> JsResult<()> {
        let square_node = self
            .board
            .append_new_element("div")?
            .with_classes(square.classes())?
            .with_attribute("data-row", &square.coord.row.to_zero_based().to_string())?
            .with_attribute("data-col", &square.coord.col.to_zero_based().to_string())?;
        square_node
            .append_new_element("div")?
            .with_classes(["cell"])?
            .with_text_content(&square.text());
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> JsResult<()> {
        self.status.set_text_content(Some(text));
        Ok(())
    }
}
