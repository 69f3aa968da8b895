pub mod contact_form;
pub mod icons;
pub mod page;
pub mod rotation;

pub use crate::domain::model::{ContactAck, ContactFormDraft};
pub use crate::domain::ports::{ConfigProvider, ContactGateway};
pub use crate::utils::error::{Result, SubmissionError};
