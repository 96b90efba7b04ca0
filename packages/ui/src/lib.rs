//! Shared UI for the workspace: session handling, access guards, and the
//! generic table/modal widgets the dashboards are built from.

pub mod components;
pub use components::{Button, ButtonVariant, Input, Label, LoadingIndicator};

mod auth;
pub use auth::{is_public_path, use_auth, AuthContext, AuthProvider, AuthState};

pub mod guard;
pub use guard::{evaluate, GuardOutcome};

mod notify;
pub use notify::{use_notices, Notice, NoticeKind, NoticeProvider, Notices};

mod modal;
pub use modal::ModalOverlay;

mod error_banner;
pub use error_banner::ErrorBanner;

pub mod dates;

pub mod table;
pub use table::{
    CellValue, DropdownField, DropdownOption, FieldChange, Row, SimpleTable,
};

mod edit_modal;
pub use edit_modal::EditModal;

mod confirm_modal;
pub use confirm_modal::ConfirmDeleteModal;
