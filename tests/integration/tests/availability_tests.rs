//! Availability rule management tests

use chrono::Weekday;
use uuid::Uuid;

use agenda_service::dto::{HourRangeDto, SetAvailabilityRequest};
use integration_tests::{booking_request, monday, TestContext};

fn hours(spans: &[(&str, &str)]) -> Vec<HourRangeDto> {
    spans
        .iter()
        .map(|(inicio, fin)| HourRangeDto {
            inicio: (*inicio).to_string(),
            fin: (*fin).to_string(),
        })
        .collect()
}

fn set_request(psicologo_id: Uuid, dia: &str, spans: &[(&str, &str)]) -> SetAvailabilityRequest {
    SetAvailabilityRequest {
        psicologo_id,
        dia: dia.to_string(),
        hours: hours(spans),
        active: true,
        sede_id: None,
        works_on_holidays: false,
    }
}

#[tokio::test]
async fn test_set_rule_and_read_back() {
    let tc = TestContext::new();
    let psicologo = Uuid::new_v4();

    let resp = tc
        .availability()
        .set_rule(set_request(psicologo, "lunes", &[("09:00", "13:00")]))
        .await
        .unwrap();
    assert_eq!(resp.dia, "lunes");
    assert!(resp.active);

    let schedule = tc.availability().weekly_schedule(psicologo).await.unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].hours.len(), 1);
}

#[tokio::test]
async fn test_unsorted_sub_ranges_accepted() {
    let tc = TestContext::new();
    let psicologo = Uuid::new_v4();

    let resp = tc
        .availability()
        .set_rule(set_request(
            psicologo,
            "martes",
            &[("14:00", "18:00"), ("08:00", "12:00")],
        ))
        .await
        .unwrap();

    // Stored sorted
    assert_eq!(resp.hours[0].inicio, "08:00");
    assert_eq!(resp.hours[1].inicio, "14:00");
}

#[tokio::test]
async fn test_overlapping_sub_ranges_rejected() {
    let tc = TestContext::new();
    let err = tc
        .availability()
        .set_rule(set_request(
            Uuid::new_v4(),
            "lunes",
            &[("08:00", "12:00"), ("11:00", "14:00")],
        ))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_unknown_day_name_rejected() {
    let tc = TestContext::new();
    let err = tc
        .availability()
        .set_rule(set_request(Uuid::new_v4(), "feriado", &[("08:00", "12:00")]))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_accented_day_name_accepted() {
    let tc = TestContext::new();
    let resp = tc
        .availability()
        .set_rule(set_request(Uuid::new_v4(), "miércoles", &[("08:00", "12:00")]))
        .await
        .unwrap();
    // Normalized to the persisted spelling
    assert_eq!(resp.dia, "miercoles");
}

#[tokio::test]
async fn test_upsert_replaces_existing_rule() {
    let tc = TestContext::new();
    let psicologo = Uuid::new_v4();
    let availability = tc.availability();

    availability
        .set_rule(set_request(psicologo, "lunes", &[("08:00", "12:00")]))
        .await
        .unwrap();
    availability
        .set_rule(set_request(psicologo, "lunes", &[("14:00", "18:00")]))
        .await
        .unwrap();

    let schedule = availability.weekly_schedule(psicologo).await.unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].hours[0].inicio, "14:00");
}

#[tokio::test]
async fn test_weekly_schedule_sorted_monday_first() {
    let tc = TestContext::new();
    let psicologo = Uuid::new_v4();
    let availability = tc.availability();

    for dia in ["domingo", "miercoles", "lunes"] {
        availability
            .set_rule(set_request(psicologo, dia, &[("08:00", "12:00")]))
            .await
            .unwrap();
    }

    let schedule = availability.weekly_schedule(psicologo).await.unwrap();
    let dias: Vec<&str> = schedule.iter().map(|r| r.dia.as_str()).collect();
    assert_eq!(dias, ["lunes", "miercoles", "domingo"]);
}

#[tokio::test]
async fn test_remove_psicologo_cascades() {
    let tc = TestContext::new();
    let psicologo = Uuid::new_v4();
    let availability = tc.availability();

    availability
        .set_rule(set_request(psicologo, "lunes", &[("08:00", "12:00")]))
        .await
        .unwrap();
    availability
        .set_rule(set_request(psicologo, "martes", &[("08:00", "12:00")]))
        .await
        .unwrap();

    let deleted = availability.remove_psicologo(psicologo).await.unwrap();
    assert_eq!(deleted, 2);
    assert!(availability.weekly_schedule(psicologo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_inactive_rule_blocks_booking() {
    let tc = TestContext::new();
    let box_id = tc.seed_room().await;
    let psicologo = Uuid::new_v4();

    let mut request = set_request(psicologo, "lunes", &[("08:00", "18:00")]);
    request.active = false;
    tc.availability().set_rule(request).await.unwrap();

    let err = tc
        .booking()
        .book(booking_request(box_id, psicologo, monday(), "09:00", "10:00"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "OUTSIDE_AVAILABILITY");
}
