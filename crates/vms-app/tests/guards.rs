//! Route guard properties over every route and session shape.

use proptest::prelude::*;
use vms_app::routing::resolve;
use vms_app::{Guard, GuardDecision, Route};
use vms_core::{GroupId, Role, Session};

fn arb_route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Landing),
        Just(Route::Login),
        Just(Route::Register),
        Just(Route::Dashboard),
        Just(Route::EventFeed),
        Just(Route::CreateEvent),
        Just(Route::Network),
        Just(Route::Groups),
        (1i64..10_000).prop_map(|id| Route::GroupDetails(GroupId(id))),
        Just(Route::Notifications),
        Just(Route::Profile),
        "/x-[a-z]{1,12}/[a-z]{1,12}".prop_map(Route::NotFound),
    ]
}

fn arb_session() -> impl Strategy<Value = Session> {
    prop_oneof![
        Just(Session::anonymous()),
        // Role without a token: a half-cleared store
        prop_oneof![Just(Role::Volunteer), Just(Role::Organizer)].prop_map(|role| Session {
            token: None,
            role: Some(role),
        }),
        ("[a-zA-Z0-9.]{1,40}", proptest::option::of(prop_oneof![
            Just(Role::Volunteer),
            Just(Role::Organizer)
        ]))
            .prop_map(|(token, role)| Session {
                token: Some(token),
                role,
            }),
    ]
}

proptest! {
    #[test]
    fn protected_routes_send_anonymous_sessions_to_login(route in arb_route(), session in arb_session()) {
        prop_assume!(!session.is_authenticated());
        if route.guards().contains(&Guard::Protected) {
            prop_assert_eq!(
                Guard::evaluate_all(route.guards(), &session),
                GuardDecision::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn public_only_routes_send_sessions_home(route in arb_route(), session in arb_session()) {
        prop_assume!(session.is_authenticated());
        if route.guards().contains(&Guard::PublicOnly) {
            prop_assert_eq!(
                Guard::evaluate_all(route.guards(), &session),
                GuardDecision::Redirect(Route::Dashboard)
            );
        }
    }

    #[test]
    fn organizer_only_needs_the_organizer_role(session in arb_session()) {
        let decision = Guard::evaluate_all(Route::CreateEvent.guards(), &session);
        let expected = if !session.is_authenticated() {
            GuardDecision::Redirect(Route::Login)
        } else if session.role == Some(Role::Organizer) {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(Route::Dashboard)
        };
        prop_assert_eq!(decision, expected);
    }

    #[test]
    fn resolution_settles_on_a_rendering_route(route in arb_route(), session in arb_session()) {
        let navigation = resolve(route.clone(), &session).unwrap();
        prop_assert_eq!(&navigation.requested, &route);
        prop_assert!(navigation.redirects.len() <= 1);
        prop_assert_eq!(
            Guard::evaluate_all(navigation.route.guards(), &session),
            GuardDecision::Render
        );
        if let Some(last) = navigation.redirects.last() {
            prop_assert_eq!(last, &navigation.route);
        }
    }

    #[test]
    fn paths_round_trip(route in arb_route()) {
        prop_assert_eq!(Route::parse(&route.path()), route);
    }
}
