//! Service functions for the game surface: registration, rigged outcomes,
//! and caller-owned state synchronization.

use crate::{
    dto::game::{
        EndGameRequest, OutcomeRequest, OutcomeResponse, StartGameRequest, StartGameResponse,
        SyncStateRequest,
    },
    error::ServiceError,
    state::SharedState,
};

/// Register an active game for a validated session token.
///
/// Re-registering an existing token resets its game, which is what a player
/// starting over expects.
pub async fn start_game(
    state: &SharedState,
    request: StartGameRequest,
) -> Result<StartGameResponse, ServiceError> {
    let session = state
        .store()
        .find_session(request.token.clone())
        .await?
        .ok_or_else(|| ServiceError::Unauthorized("unknown or expired session".into()))?;

    state.games().register(request.token, request.level);
    Ok(StartGameResponse {
        username: session.username,
    })
}

/// Next rigged outcome for a token.
///
/// Never fails: an unregistered token is an immediate bust, per the engine
/// contract, so the client always gets a usable answer.
pub fn next_outcome(state: &SharedState, request: OutcomeRequest) -> OutcomeResponse {
    OutcomeResponse {
        outcome: state.games().next_outcome(&request.token),
    }
}

/// Push the caller-owned fields (money, streak, level) into the registry.
pub fn sync_state(state: &SharedState, request: SyncStateRequest) -> Result<(), ServiceError> {
    if state
        .games()
        .sync(&request.token, request.money, request.streak, request.level)
    {
        Ok(())
    } else {
        Err(ServiceError::NotFound("no active game for token".into()))
    }
}

/// Evict a token's game state. Idempotent: evicting an unknown token is a
/// no-op, since the external expiry policy may already have removed it.
pub fn end_game(state: &SharedState, request: EndGameRequest) {
    state.games().remove(&request.token);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::SystemTime;

    use super::*;
    use crate::dao::models::SessionEntity;
    use crate::dao::testing::MemStore;
    use crate::state::AppState;

    fn state_with_session(token: &str) -> SharedState {
        let store = MemStore::with_session(
            token,
            SessionEntity {
                username: "alice".into(),
                created_at: SystemTime::now(),
            },
        );
        AppState::new(Arc::new(store))
    }

    #[tokio::test]
    async fn start_requires_a_known_session() {
        let state = state_with_session("tok-1");

        let response = start_game(
            &state,
            StartGameRequest {
                token: "tok-1".into(),
                level: 3,
            },
        )
        .await
        .unwrap();
        assert_eq!(response.username, "alice");

        let err = start_game(
            &state,
            StartGameRequest {
                token: "tok-2".into(),
                level: 3,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn outcome_for_unregistered_token_is_a_bust() {
        let state = state_with_session("tok-1");

        let response = next_outcome(
            &state,
            OutcomeRequest {
                token: "tok-1".into(),
            },
        );
        assert_eq!(response.outcome, 0);
        assert!(state.games().is_empty());
    }

    #[tokio::test]
    async fn sync_rejects_unknown_tokens_and_end_is_idempotent() {
        let state = state_with_session("tok-1");
        start_game(
            &state,
            StartGameRequest {
                token: "tok-1".into(),
                level: 1,
            },
        )
        .await
        .unwrap();

        assert!(
            sync_state(
                &state,
                SyncStateRequest {
                    token: "tok-1".into(),
                    money: 1_000,
                    streak: 2,
                    level: 1,
                },
            )
            .is_ok()
        );

        let err = sync_state(
            &state,
            SyncStateRequest {
                token: "other".into(),
                money: 0,
                streak: 0,
                level: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        end_game(
            &state,
            EndGameRequest {
                token: "tok-1".into(),
            },
        );
        end_game(
            &state,
            EndGameRequest {
                token: "tok-1".into(),
            },
        );
        assert!(state.games().is_empty());
    }
}
