use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::system::auth::{api_token, password};

/// Create a new user.
///
/// A freshly created account gets exactly one API token, provisioned here,
/// at the single call site that knows the user is new. Updates never touch
/// tokens.
pub async fn create(dto: CreateUserDto, created_by: Option<String>) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
        created_by,
    };

    repository::create_with_password(&user, &password_hash).await?;
    api_token::create_for_user(&user_id).await?;

    Ok(user_id)
}

/// Update user
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    user.email = dto.email;
    user.full_name = dto.full_name;
    user.is_active = dto.is_active;
    user.is_admin = dto.is_admin;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await?;

    Ok(())
}

/// Delete user
pub async fn delete(id: &str) -> Result<bool> {
    repository::delete(id).await
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// List all users
pub async fn list_all() -> Result<Vec<User>> {
    repository::list_all().await
}

/// Change user password
pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> Result<()> {
    let _user = repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Requester not found"))?;

    if dto.user_id != requester_id {
        // Changing someone else's password - must be admin
        if !requester.is_admin {
            return Err(anyhow::anyhow!("Permission denied"));
        }
    } else if let Some(ref old_password) = dto.old_password {
        let current_hash = repository::get_password_hash(&dto.user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

        if !password::verify_password(old_password, &current_hash)? {
            return Err(anyhow::anyhow!("Invalid old password"));
        }
    }

    password::validate_password_strength(&dto.new_password)?;
    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(&dto.user_id, &new_hash).await?;

    Ok(())
}

/// Verify user credentials (for login)
pub async fn verify_credentials(username: &str, password_input: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        return Err(anyhow::anyhow!("User account is inactive"));
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password_input, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&user.id).await;

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn create_dto(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.into(),
            password: "s3cret!".into(),
            email: Some(format!("{}@example.org", username)),
            full_name: None,
            is_admin: false,
        }
    }

    #[test]
    fn creating_a_user_provisions_exactly_one_token() {
        test_support::run(async {
            let user_id = create(create_dto("token-once"), None).await.unwrap();
            assert_eq!(api_token::count_for_user(&user_id).await.unwrap(), 1);
        });
    }

    #[test]
    fn updating_a_user_provisions_no_token() {
        test_support::run(async {
            let user_id = create(create_dto("token-update"), None).await.unwrap();

            update(UpdateUserDto {
                id: user_id.clone(),
                email: Some("renamed@example.org".into()),
                full_name: Some("Renamed".into()),
                is_active: true,
                is_admin: false,
            })
            .await
            .unwrap();

            assert_eq!(api_token::count_for_user(&user_id).await.unwrap(), 1);
        });
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        test_support::run(async {
            create(create_dto("dup-user"), None).await.unwrap();
            assert!(create(create_dto("dup-user"), None).await.is_err());
        });
    }

    #[test]
    fn credentials_verify_against_the_stored_hash() {
        test_support::run(async {
            create(create_dto("login-user"), None).await.unwrap();

            let ok = verify_credentials("login-user", "s3cret!").await.unwrap();
            assert!(ok.is_some());

            let bad = verify_credentials("login-user", "nope").await.unwrap();
            assert!(bad.is_none());
        });
    }
}
