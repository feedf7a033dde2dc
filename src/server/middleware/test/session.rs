use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests storing and clearing the signed-in user.
///
/// Expected: the stored id is read back, then gone after clearing
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(17).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(17));

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
