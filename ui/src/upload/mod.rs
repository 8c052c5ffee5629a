mod state;
pub use state::{
    display_name, SubmissionPhase, SubmitOutcome, SubmitRejection, SubmitTicket, UploadPanelState,
    ValidationError,
};

mod view;
pub use view::FileUploadPanel;
