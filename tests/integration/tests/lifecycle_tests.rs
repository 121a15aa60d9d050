//! Reservation lifecycle tests

use chrono::Weekday;
use uuid::Uuid;

use agenda_core::entities::{Reservation, ReservationStatus};
use agenda_core::error::DomainError;
use agenda_core::value_objects::Slot;
use agenda_service::dto::TransitionRequest;
use agenda_service::ServiceError;
use integration_tests::{booking_request, monday, TestContext};

fn transition_to(estado: &str) -> TransitionRequest {
    TransitionRequest {
        estado: estado.to_string(),
    }
}

async fn seed_booking(tc: &TestContext, pendiente: bool) -> (Uuid, Uuid, Uuid) {
    let box_id = tc.seed_room().await;
    let psicologo = Uuid::new_v4();
    tc.seed_rule(psicologo, Weekday::Mon, "08:00", "18:00").await;

    let mut request = booking_request(box_id, psicologo, monday(), "09:00", "10:00");
    request.require_confirmation = pendiente;
    let resp = tc.booking().book(request).await.unwrap();
    (resp.id, box_id, psicologo)
}

#[tokio::test]
async fn test_full_lifecycle_pendiente_to_completada() {
    let tc = TestContext::new();
    let (id, _, _) = seed_booking(&tc, true).await;
    let lifecycle = tc.lifecycle();

    let confirmed = lifecycle.transition(id, &transition_to("confirmada")).await.unwrap();
    assert_eq!(confirmed.estado, "confirmada");

    let completed = lifecycle.transition(id, &transition_to("completada")).await.unwrap();
    assert_eq!(completed.estado, "completada");
}

#[tokio::test]
async fn test_completed_reservation_cannot_be_reopened() {
    let tc = TestContext::new();
    let (id, _, _) = seed_booking(&tc, false).await;
    let lifecycle = tc.lifecycle();

    lifecycle.transition(id, &transition_to("completada")).await.unwrap();

    for target in ["pendiente", "confirmada", "cancelada"] {
        let err = lifecycle.transition(id, &transition_to(target)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::InvalidTransition { .. })
        ));
        assert_eq!(err.status_code(), 422);
    }
}

#[tokio::test]
async fn test_unknown_status_label_rejected() {
    let tc = TestContext::new();
    let (id, _, _) = seed_booking(&tc, false).await;

    let err = tc
        .lifecycle()
        .transition(id, &transition_to("reservada"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_cancel_then_rebook_same_interval() {
    let tc = TestContext::new();
    let (id, box_id, psicologo) = seed_booking(&tc, false).await;

    tc.lifecycle().cancel(id).await.unwrap();

    // The cancelled reservation released its interval
    let rebooked = tc
        .booking()
        .book(booking_request(box_id, psicologo, monday(), "09:00", "10:00"))
        .await
        .unwrap();
    assert_ne!(rebooked.id, id);
    tc.reservations.assert_no_active_overlaps();
}

#[tokio::test]
async fn test_cancelled_reservation_is_terminal() {
    let tc = TestContext::new();
    let (id, _, _) = seed_booking(&tc, false).await;
    let lifecycle = tc.lifecycle();

    lifecycle.cancel(id).await.unwrap();
    let err = lifecycle.cancel(id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn test_confirmation_rechecks_overlap() {
    let tc = TestContext::new();
    let (id, box_id, _) = seed_booking(&tc, true).await;

    // Stage a confirmed reservation that raced in on the same interval
    let raced = Reservation::from_slot(
        Uuid::new_v4(),
        Slot::parse(box_id, monday(), "09:00", "10:00").unwrap(),
        Uuid::new_v4(),
        ReservationStatus::Confirmada,
        25_000,
    );
    let raced_id = raced.id;
    tc.reservations.insert_raw(raced);

    let err = tc
        .lifecycle()
        .transition(id, &transition_to("confirmada"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::SchedulingConflict { conflicting_id }) => {
            assert_eq!(conflicting_id, raced_id);
        }
        other => panic!("expected SchedulingConflict, got {other}"),
    }

    // Nothing committed: the reservation is still pendiente
    let current = tc.lifecycle().get(id).await.unwrap();
    assert_eq!(current.estado, "pendiente");
}

#[tokio::test]
async fn test_stale_confirm_does_not_resurrect_cancelled() {
    use agenda_core::traits::ReservationRepository;

    let tc = TestContext::new();
    let (id, _, _) = seed_booking(&tc, true).await;

    tc.lifecycle().cancel(id).await.unwrap();

    // A writer that loaded the row as pendiente before the cancel landed:
    // its compare-and-set must lose against the stored cancelada
    let err = tc
        .reservations
        .update_estado(id, ReservationStatus::Pendiente, ReservationStatus::Confirmada)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition {
            from: ReservationStatus::Cancelada,
            to: ReservationStatus::Confirmada,
        }
    ));

    let current = tc.lifecycle().get(id).await.unwrap();
    assert_eq!(current.estado, "cancelada");
}

#[tokio::test]
async fn test_transition_on_missing_reservation() {
    let tc = TestContext::new();
    let err = tc
        .lifecycle()
        .transition(Uuid::new_v4(), &transition_to("confirmada"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.error_code(), "UNKNOWN_RESERVATION");
}
