use crate::widget::Widget;

use super::*;

pub async fn home(State(state): State<AppState>) -> Response {
    let store = state.store.lock().unwrap();

    match store.list() {
        Ok(comments) => {
            let mut widget = Widget::new();
            widget.loaded(comments);
            html::pages::comments(&widget).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
