//! State machine behind the dataset upload panel.
//!
//! The view owns a `Signal<UploadPanelState>` and drives it with user events
//! (`select_file`, `clear_selection`, `begin_submit`) and with the resolution
//! of the single outstanding request (`finish_submit`). Nothing here touches
//! the DOM or the network, so every transition is unit tested below.

use std::fmt;

use api::UploadOutcome;

use crate::analysis::AnalysisResult;

/// Error shown inline under the picker. Blocks submission until a new file is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoFileSelected,
    /// Message authored by the server (`{ "Empty": .. }`), shown verbatim.
    Server(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileSelected => f.write_str("Please select a file to upload."),
            Self::Server(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting {
        attempt: u64,
    },
    Succeeded,
    Failed,
}

/// Why `begin_submit` refused to start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoFileSelected,
    AlreadySubmitting,
}

/// Handed to the caller when a submission starts; echo `attempt` back in `finish_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub attempt: u64,
    pub file_name: String,
}

/// How a submission ended. All three variants are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(AnalysisResult),
    Rejected(String),
    Failed(String),
}

impl From<UploadOutcome> for SubmitOutcome {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Success(resp) => Self::Success(AnalysisResult::from(resp)),
            UploadOutcome::Rejected(message) => Self::Rejected(message),
            UploadOutcome::Failed(err) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPanelState {
    file_name: Option<String>,
    picker_locked: bool,
    input_generation: u64,
    validation_error: Option<ValidationError>,
    failure: Option<String>,
    phase: SubmissionPhase,
    next_attempt: u64,
    result: Option<AnalysisResult>,
}

impl UploadPanelState {
    /// Record the outcome of the native picker. `None` means the selection was cancelled.
    pub fn select_file(&mut self, name: Option<String>) {
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => {
                self.file_name = Some(name);
                self.validation_error = None;
                self.failure = None;
                self.picker_locked = false;
            }
            None => {
                self.file_name = None;
                self.picker_locked = true;
            }
        }
    }

    /// Drop the selection and remount the native input so the same file can be picked again.
    pub fn clear_selection(&mut self) {
        self.file_name = None;
        self.failure = None;
        self.picker_locked = true;
        self.input_generation = self.input_generation.wrapping_add(1);
    }

    /// Unlock the picker once the file-list mutation has been processed.
    pub fn release_picker(&mut self) {
        self.picker_locked = false;
    }

    /// Check preconditions and, only if they hold, move into `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::AlreadySubmitting);
        }

        let Some(file_name) = self.file_name.clone() else {
            self.validation_error = Some(ValidationError::NoFileSelected);
            return Err(SubmitRejection::NoFileSelected);
        };

        let attempt = self.next_attempt;
        self.next_attempt = self.next_attempt.wrapping_add(1);
        self.failure = None;
        self.phase = SubmissionPhase::Submitting { attempt };

        Ok(SubmitTicket { attempt, file_name })
    }

    /// Apply the outcome of `attempt`. Outcomes for any other attempt are ignored.
    /// Returns whether the outcome was applied.
    pub fn finish_submit(&mut self, attempt: u64, outcome: SubmitOutcome) -> bool {
        if self.phase != (SubmissionPhase::Submitting { attempt }) {
            return false;
        }

        match outcome {
            SubmitOutcome::Success(result) => {
                self.result = Some(result);
                self.phase = SubmissionPhase::Succeeded;
            }
            SubmitOutcome::Rejected(message) => {
                self.validation_error = Some(ValidationError::Server(message));
                self.phase = SubmissionPhase::Idle;
            }
            SubmitOutcome::Failed(message) => {
                self.failure = Some(message);
                self.phase = SubmissionPhase::Failed;
            }
        }
        true
    }

    pub fn submit_disabled(&self, is_authenticated: bool) -> bool {
        self.file_name.is_none()
            || self.validation_error.is_some()
            || !is_authenticated
            || self.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmissionPhase::Succeeded
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn picker_locked(&self) -> bool {
        self.picker_locked
    }

    pub fn input_generation(&self) -> u64 {
        self.input_generation
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }
}

/// Desktop pickers report full paths; the panel only shows the last segment.
pub fn display_name(reported: &str) -> &str {
    reported
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(reported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            total_rows: 10,
            total_cols: 3,
            column_names: vec!["a".into(), "b".into(), "c".into()],
            missing_value_counts: vec![0, 2, 1],
            result_text: "ok".into(),
        }
    }

    fn with_file(name: &str) -> UploadPanelState {
        let mut state = UploadPanelState::default();
        state.select_file(Some(name.to_string()));
        state
    }

    #[test]
    fn starts_empty_and_idle() {
        let state = UploadPanelState::default();
        assert!(state.file_name().is_none());
        assert!(!state.picker_locked());
        assert!(state.validation_error().is_none());
        assert!(!state.is_loading());
        assert!(!state.is_success());
        assert!(state.result().is_none());
    }

    #[test]
    fn selecting_a_file_records_name_and_clears_error() {
        let mut state = UploadPanelState::default();
        let _ = state.begin_submit();
        assert!(state.validation_error().is_some());

        state.select_file(Some("survey.csv".into()));

        assert_eq!(state.file_name(), Some("survey.csv"));
        assert!(state.validation_error().is_none());
        assert!(!state.picker_locked());
    }

    #[test]
    fn cancelled_selection_locks_until_released() {
        let mut state = with_file("survey.csv");
        state.select_file(None);

        assert!(state.file_name().is_none());
        assert!(state.picker_locked());

        state.release_picker();
        assert!(!state.picker_locked());
    }

    #[test]
    fn blank_name_counts_as_cancelled() {
        let mut state = UploadPanelState::default();
        state.select_file(Some("  ".into()));
        assert!(state.file_name().is_none());
    }

    #[test]
    fn clear_selection_empties_name_and_remounts_input() {
        let mut state = with_file("survey.csv");
        let before = state.input_generation();

        state.clear_selection();

        assert!(state.file_name().is_none());
        assert!(state.picker_locked());
        assert_ne!(state.input_generation(), before);
    }

    #[test]
    fn clear_selection_drops_previous_failure() {
        let mut state = with_file("survey.csv");
        let ticket = state.begin_submit().unwrap();
        state.finish_submit(ticket.attempt, SubmitOutcome::Failed("timed out".into()));
        assert_eq!(state.failure(), Some("timed out"));

        state.clear_selection();

        assert!(state.failure().is_none());
        assert!(state.file_name().is_none());
    }

    #[test]
    fn clear_selection_twice_matches_once() {
        let mut once = with_file("survey.csv");
        once.clear_selection();

        let mut twice = with_file("survey.csv");
        twice.clear_selection();
        twice.clear_selection();

        assert_eq!(once.file_name(), twice.file_name());
        assert_eq!(once.validation_error(), twice.validation_error());
        assert!(twice.validation_error().is_none());
        assert_eq!(once.picker_locked(), twice.picker_locked());
    }

    #[test]
    fn submit_without_file_sets_message_and_never_loads() {
        let mut state = UploadPanelState::default();

        let rejection = state.begin_submit().unwrap_err();

        assert_eq!(rejection, SubmitRejection::NoFileSelected);
        assert_eq!(
            state.validation_error().map(ToString::to_string).as_deref(),
            Some("Please select a file to upload.")
        );
        assert!(!state.is_loading());
        assert!(!state.is_success());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn submit_with_file_enters_loading() {
        let mut state = with_file("survey.csv");

        let ticket = state.begin_submit().unwrap();

        assert_eq!(ticket.file_name, "survey.csv");
        assert!(state.is_loading());
        assert!(!state.is_success());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = with_file("survey.csv");
        let first = state.begin_submit().unwrap();

        assert_eq!(
            state.begin_submit().unwrap_err(),
            SubmitRejection::AlreadySubmitting
        );
        assert_eq!(
            state.phase(),
            SubmissionPhase::Submitting {
                attempt: first.attempt
            }
        );
    }

    #[test]
    fn success_stores_result_verbatim() {
        let mut state = with_file("survey.csv");
        let ticket = state.begin_submit().unwrap();

        assert!(state.finish_submit(ticket.attempt, SubmitOutcome::Success(sample_result())));

        assert_eq!(state.result(), Some(&sample_result()));
        assert!(!state.is_loading());
        assert!(state.is_success());
    }

    #[test]
    fn new_success_overwrites_previous_result() {
        let mut state = with_file("survey.csv");
        let first = state.begin_submit().unwrap();
        state.finish_submit(first.attempt, SubmitOutcome::Success(sample_result()));

        let replacement = AnalysisResult {
            total_rows: 2,
            total_cols: 1,
            column_names: vec!["z".into()],
            missing_value_counts: vec![1],
            result_text: "second".into(),
        };
        let second = state.begin_submit().unwrap();
        assert!(!state.is_success());
        state.finish_submit(second.attempt, SubmitOutcome::Success(replacement.clone()));

        assert_eq!(state.result(), Some(&replacement));
    }

    #[test]
    fn rejection_shows_server_message_and_blocks_resubmit() {
        let mut state = with_file("huge.xlsx");
        let ticket = state.begin_submit().unwrap();

        state.finish_submit(ticket.attempt, SubmitOutcome::Rejected("file too large".into()));

        assert_eq!(
            state.validation_error(),
            Some(&ValidationError::Server("file too large".into()))
        );
        assert_eq!(
            state.validation_error().map(ToString::to_string).as_deref(),
            Some("file too large")
        );
        assert!(!state.is_loading());
        assert!(!state.is_success());
        assert!(state.submit_disabled(true));

        state.select_file(Some("smaller.csv".into()));
        assert!(!state.submit_disabled(true));
    }

    #[test]
    fn unrecognized_failure_clears_loading_and_allows_retry() {
        let mut state = with_file("survey.csv");
        let ticket = state.begin_submit().unwrap();

        state.finish_submit(
            ticket.attempt,
            SubmitOutcome::Failed("server responded with status 502".into()),
        );

        assert!(!state.is_loading());
        assert_eq!(state.phase(), SubmissionPhase::Failed);
        assert_eq!(state.failure(), Some("server responded with status 502"));
        assert!(!state.submit_disabled(true));

        state.begin_submit().unwrap();
        assert!(state.failure().is_none());
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut state = with_file("survey.csv");
        let first = state.begin_submit().unwrap();
        state.finish_submit(first.attempt, SubmitOutcome::Failed("boom".into()));
        let second = state.begin_submit().unwrap();

        assert!(!state.finish_submit(first.attempt, SubmitOutcome::Success(sample_result())));
        assert!(state.is_loading());

        assert!(state.finish_submit(second.attempt, SubmitOutcome::Success(sample_result())));
        assert!(state.is_success());
    }

    #[test]
    fn unauthenticated_always_disables_submit() {
        let empty = UploadPanelState::default();
        let ready = with_file("survey.csv");
        let mut loading = with_file("survey.csv");
        loading.begin_submit().unwrap();

        for state in [&empty, &ready, &loading] {
            assert!(state.submit_disabled(false));
        }
        assert!(!ready.submit_disabled(true));
    }

    #[test]
    fn disabled_without_file_or_while_loading() {
        assert!(UploadPanelState::default().submit_disabled(true));

        let mut loading = with_file("survey.csv");
        loading.begin_submit().unwrap();
        assert!(loading.submit_disabled(true));
    }

    #[test]
    fn upload_outcome_maps_into_submit_outcome() {
        let response = api::AnalysisResponse {
            success: true,
            total_rows: 10,
            total_columns: 3,
            columns: vec!["a".into(), "b".into(), "c".into()],
            na_values: vec![0, 2, 1],
            result: "ok".into(),
        };

        assert_eq!(
            SubmitOutcome::from(UploadOutcome::Success(response)),
            SubmitOutcome::Success(sample_result())
        );
        assert_eq!(
            SubmitOutcome::from(UploadOutcome::Failed(api::UploadError::Status { status: 500 })),
            SubmitOutcome::Failed("server responded with status 500".into())
        );
    }

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name("/home/me/data/survey.csv"), "survey.csv");
        assert_eq!(display_name(r"C:\Users\me\survey.xlsx"), "survey.xlsx");
        assert_eq!(display_name("survey.csv"), "survey.csv");
    }
}
