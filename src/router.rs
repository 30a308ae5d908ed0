use crate::errors::ServerError;
use crate::forms;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::store::ApplicationStore;
use crate::templates;
use astra::Request;
use std::sync::Mutex;

pub fn handle(req: Request, store: &Mutex<ApplicationStore>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let store = lock(store)?;
            html_response(templates::pages::home_page(&store.grouped()))
        }

        ("POST", "/add") => {
            let fields = forms::read_form(req)?;
            let draft = forms::draft_from_form(&fields)?;

            let mut store = lock(store)?;
            store.add(draft)?;
            redirect_response("/")
        }

        ("POST", "/status") => {
            let fields = forms::read_form(req)?;
            let id = forms::id_from_form(&fields)?;
            let status = forms::status_from_form(&fields)?;

            let mut store = lock(store)?;
            store.set_status(id, status)?;
            redirect_response("/")
        }

        ("POST", "/delete") => {
            let fields = forms::read_form(req)?;
            let id = forms::id_from_form(&fields)?;

            let mut store = lock(store)?;
            store.remove(id)?;
            redirect_response("/")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn lock(store: &Mutex<ApplicationStore>) -> Result<std::sync::MutexGuard<'_, ApplicationStore>, ServerError> {
    store.lock().map_err(|_| ServerError::InternalError)
}
