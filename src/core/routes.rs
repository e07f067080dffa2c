// Intent routing: maps decoded requests onto portal handlers

use crate::core::error::IntentError;
use crate::core::portal::{Portal, Preconfirmed};
use crate::metrics::collector::MetricsSnapshot;
use crate::models::attendance::AttendanceMark;
use crate::models::leave::LeaveHistoryEntry;
use crate::models::material::MaterialGroup;
use crate::models::navigation::{PageId, TabId};
use crate::validation::forms::{AttendanceQuery, LeaveForm, LoginForm, UploadForm};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A user action as sent by the view layer, e.g.
/// `{"intent":"switch_tab","tab":"leave"}`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Login(LoginForm),
    Logout {
        /// Answer to the logout prompt, collected by the host. Absent means no.
        #[serde(default)]
        confirmed: bool,
    },
    SwitchPage {
        page: PageId,
    },
    SwitchTab {
        tab: TabId,
    },
    LoadAttendance(AttendanceQuery),
    SaveAttendance {
        #[serde(default)]
        marks: Vec<AttendanceMark>,
    },
    SubmitLeave(LeaveForm),
    PreviewLeaveDays {
        #[serde(default)]
        from_date: Option<NaiveDate>,
        #[serde(default)]
        to_date: Option<NaiveDate>,
    },
    UploadMaterial(UploadForm),
    DeleteMaterial {
        id: String,
        #[serde(default)]
        confirmed: bool,
    },
    DownloadMaterial {
        id: String,
    },
    LeaveHistory,
    MaterialGroups,
    Stats,
}

/// Anything an intent hands back besides its events
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Reply {
    Done,
    LeaveDays { days: Option<i64> },
    LeaveHistory { entries: Vec<LeaveHistoryEntry> },
    MaterialGroups { groups: Vec<MaterialGroup> },
    Stats(MetricsSnapshot),
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Login(_) => "login",
            Intent::Logout { .. } => "logout",
            Intent::SwitchPage { .. } => "switch_page",
            Intent::SwitchTab { .. } => "switch_tab",
            Intent::LoadAttendance(_) => "load_attendance",
            Intent::SaveAttendance { .. } => "save_attendance",
            Intent::SubmitLeave(_) => "submit_leave",
            Intent::PreviewLeaveDays { .. } => "preview_leave_days",
            Intent::UploadMaterial(_) => "upload_material",
            Intent::DeleteMaterial { .. } => "delete_material",
            Intent::DownloadMaterial { .. } => "download_material",
            Intent::LeaveHistory => "leave_history",
            Intent::MaterialGroups => "material_groups",
            Intent::Stats => "stats",
        }
    }
}

/// Run one intent to completion
pub fn dispatch(portal: &mut Portal, intent: Intent) -> Result<Reply, IntentError> {
    match intent {
        Intent::Login(form) => portal.login(&form.email, &form.password).map(|_| Reply::Done),
        Intent::Logout { confirmed } => portal
            .logout(&mut Preconfirmed(confirmed))
            .map(|_| Reply::Done),
        Intent::SwitchPage { page } => portal.switch_page(page).map(|_| Reply::Done),
        Intent::SwitchTab { tab } => portal.switch_tab(tab).map(|_| Reply::Done),
        Intent::LoadAttendance(query) => portal.load_attendance(&query).map(|_| Reply::Done),
        Intent::SaveAttendance { marks } => portal.save_attendance(&marks).map(|_| Reply::Done),
        Intent::SubmitLeave(form) => portal.submit_leave(&form).map(|_| Reply::Done),
        Intent::PreviewLeaveDays { from_date, to_date } => portal
            .preview_leave_days(from_date, to_date)
            .map(|days| Reply::LeaveDays { days }),
        Intent::UploadMaterial(form) => portal.upload_material(&form).map(|_| Reply::Done),
        Intent::DeleteMaterial { id, confirmed } => portal
            .delete_material(&id, &mut Preconfirmed(confirmed))
            .map(|_| Reply::Done),
        Intent::DownloadMaterial { id } => portal.download_material(&id).map(|_| Reply::Done),
        Intent::LeaveHistory => Ok(Reply::LeaveHistory {
            entries: portal.leave_history(),
        }),
        Intent::MaterialGroups => Ok(Reply::MaterialGroups {
            groups: portal.material_groups(),
        }),
        Intent::Stats => Ok(Reply::Stats(portal.metrics_snapshot())),
    }
}

/// Decode one request line. Malformed input, unknown intents and unknown
/// enum values are counted and reported to the user as an error.
pub fn parse_intent(portal: &Portal, line: &str) -> Option<Intent> {
    match serde_json::from_str::<Intent>(line) {
        Ok(intent) => Some(intent),
        Err(e) => {
            warn!(error = %e, "Malformed intent");
            portal.reject_malformed();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::models::material::{FileMeta, MaterialType};
    use crate::models::notice::Severity;
    use crate::notify::sink::RecordingSink;

    fn portal() -> (Portal, RecordingSink) {
        let sink = RecordingSink::new();
        let portal = Portal::new(Config::default(), Box::new(sink.clone()));
        (portal, sink)
    }

    fn run(portal: &mut Portal, line: &str) -> Option<Result<Reply, IntentError>> {
        parse_intent(portal, line).map(|intent| dispatch(portal, intent))
    }

    #[test]
    fn test_parse_intents() {
        let (portal, _sink) = portal();

        let intent = parse_intent(&portal, r#"{"intent":"switch_tab","tab":"materials"}"#).unwrap();
        assert!(matches!(intent, Intent::SwitchTab { tab: TabId::Materials }));

        let intent = parse_intent(
            &portal,
            r#"{"intent":"load_attendance","subject":"CS201","date":"2026-01-15"}"#,
        )
        .unwrap();
        assert_eq!(intent.name(), "load_attendance");

        let intent = parse_intent(&portal, r#"{"intent":"logout","confirmed":true}"#).unwrap();
        assert!(matches!(intent, Intent::Logout { confirmed: true }));

        let intent = parse_intent(&portal, r#"{"intent":"leave_history"}"#).unwrap();
        assert_eq!(intent.name(), "leave_history");
        let intent = parse_intent(&portal, r#"{"intent":"material_groups"}"#).unwrap();
        assert_eq!(intent.name(), "material_groups");
    }

    #[test]
    fn test_unknown_intent_is_reported() {
        let (portal, sink) = portal();

        assert!(parse_intent(&portal, r#"{"intent":"approve_leave","id":"LRQ-002"}"#).is_none());
        assert!(parse_intent(&portal, r#"{"intent":"switch_tab","tab":"grades"}"#).is_none());
        assert!(parse_intent(&portal, "not json").is_none());

        let notices = sink.notices();
        assert_eq!(notices.len(), 3);
        assert!(notices.iter().all(|(_, severity)| *severity == Severity::Error));
        assert_eq!(portal.metrics_snapshot().rejected_intents, 3);
    }

    #[test]
    fn test_full_flow() {
        let (mut portal, sink) = portal();

        for line in [
            r#"{"intent":"login","email":"john.doe@college.edu","password":"secret"}"#,
            r#"{"intent":"switch_tab","tab":"attendance"}"#,
            r#"{"intent":"load_attendance","subject":"CS201","date":"2026-01-15"}"#,
            r#"{"intent":"save_attendance","marks":[{"roll_number":"21CS001","status":"present"}]}"#,
            r#"{"intent":"submit_leave","leave_type":"casual","from_date":"2026-02-02","to_date":"2026-02-03","reason":"Conference","coverage":"Dr. Rao"}"#,
        ] {
            assert!(matches!(run(&mut portal, line), Some(Ok(Reply::Done))));
        }

        assert_eq!(portal.session().user().unwrap().display_name, "John Doe");
        assert_eq!(portal.state().attendance.len(), 1);
        assert_eq!(portal.leave_history()[0].reason, "Conference");
        assert!(sink.notices().iter().all(|(_, s)| *s == Severity::Success));

        let reply = run(&mut portal, r#"{"intent":"stats"}"#).unwrap().unwrap();
        match reply {
            Reply::Stats(snapshot) => {
                assert_eq!(snapshot.total_intents, 5);
                assert_eq!(snapshot.accepted_intents, 5);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_preview_reply() {
        let (mut portal, _sink) = portal();

        let reply = run(
            &mut portal,
            r#"{"intent":"preview_leave_days","from_date":"2026-01-10","to_date":"2026-01-14"}"#,
        )
        .unwrap()
        .unwrap();

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["event"], "leave_days");
        assert_eq!(json["days"], 5);
    }

    fn upload(portal: &mut Portal) -> String {
        portal
            .upload_material(&UploadForm {
                subject: "CS305".to_string(),
                material_type: Some(MaterialType::Lecture),
                name: "Normal forms".to_string(),
                description: String::new(),
                file: Some(FileMeta::new("nf.pdf", 2048)),
            })
            .unwrap()
            .id
    }

    #[test]
    fn test_unconfirmed_destructive_intents_change_nothing() {
        let (mut portal, sink) = portal();
        portal.login("john.doe@college.edu", "pw").unwrap();
        let id = upload(&mut portal);
        sink.clear();

        let line = format!(r#"{{"intent":"delete_material","id":"{}"}}"#, id);
        assert!(matches!(run(&mut portal, &line), Some(Ok(Reply::Done))));
        assert!(matches!(
            run(&mut portal, r#"{"intent":"logout"}"#),
            Some(Ok(Reply::Done))
        ));

        assert!(portal.state().materials.contains(&id));
        assert!(portal.session().is_logged_in);
        assert!(sink.events().is_empty());
        assert_eq!(portal.metrics_snapshot().declined_confirmations, 2);

        let line = format!(r#"{{"intent":"delete_material","id":"{}","confirmed":true}}"#, id);
        assert!(matches!(run(&mut portal, &line), Some(Ok(Reply::Done))));
        assert!(!portal.state().materials.contains(&id));
    }

    #[test]
    fn test_declined_delete_keeps_material() {
        let (mut portal, _sink) = portal();
        let id = upload(&mut portal);

        let line = format!(
            r#"{{"intent":"delete_material","id":"{}","confirmed":false}}"#,
            id
        );
        assert!(matches!(run(&mut portal, &line), Some(Ok(Reply::Done))));
        assert!(portal.state().materials.contains(&id));
    }
}
