use color_print::cformat;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub enum ErrorType {
    Io,
    Utf8,
}

#[derive(Clone, Debug)]
pub enum WithItem {
    Template,
    Command,
}

impl fmt::Display for WithItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            WithItem::Template => "template",
            WithItem::Command => "command",
        };
        write!(f, "{}", msg)
    }
}

#[derive(Clone)]
pub struct StampError {
    pub error_type: ErrorType,
    pub item: WithItem,
    pub path: PathBuf,
    pub message: Option<String>,
}

impl fmt::Display for StampError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let item = &self.item;
        let message = &self.message;
        let msg_fmt = match message {
            Some(msg) => cformat!("<strong>{msg}</>"),
            None => String::new(),
        };
        let path = self
            .path
            .to_str()
            .unwrap_or("<invalid-utf8-path>");
        let err_msg = match self.error_type {
            ErrorType::Io => {
                cformat!("The {item} <r>{path}</> encountered an IO error. {msg_fmt}")
            }
            ErrorType::Utf8 => {
                cformat!("The {item} <r>{path}</> produced text that is not valid UTF-8. {msg_fmt}")
            }
        };
        write!(f, "{err_msg}")
    }
}

impl fmt::Debug for StampError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StampError")
            .field("item", &self.item)
            .field("error_type", &self.error_type)
            .field("path", &self.path)
            .field("message", &self.message)
            .finish()
    }
}

pub trait MapStampErr<T, E> {
    fn map_stamp_err(
        self,
        item: WithItem,
        error_type: ErrorType,
        path: &PathBuf,
        message: Option<String>,
    ) -> Result<T, StampError>;
}

impl<T, E: std::fmt::Display> MapStampErr<T, E> for Result<T, E> {
    fn map_stamp_err(
        self,
        item: WithItem,
        error_type: ErrorType,
        path: &PathBuf,
        message: Option<String>,
    ) -> Result<T, StampError> {
        self.map_err(|e| {
            let msg = message.unwrap_or_else(|| format!("{}", e));
            StampError {
                error_type,
                item,
                path: path.clone(),
                message: Some(msg),
            }
        })
    }
}
