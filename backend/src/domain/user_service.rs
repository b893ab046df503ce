//! User administration and self-service profile operations.

use std::collections::BTreeSet;
use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::UserRepository;
use crate::domain::{Address, Error, ErrorCode, SecurityContext, User, UserId, is_campus_email};

/// Profile submitted at registration. Credentials are registered with the
/// authentication service, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub fullname: Option<String>,
    pub email: String,
    pub address: Option<Address>,
}

/// Profile changes applied by [`UserService::update`]. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub roles: Option<BTreeSet<String>>,
    pub address: Option<Address>,
}

/// Service over the user repository.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Register a customer profile with the `USER` role.
    ///
    /// # Errors
    /// - [`ErrorCode::UsernameExisted`] when the username is taken.
    /// - [`ErrorCode::InvalidEmail`] unless the address is a university one.
    /// - [`ErrorCode::EmailExisted`] when another user has the address.
    pub async fn register(&self, new_user: NewUser) -> Result<User, Error> {
        let NewUser {
            username,
            fullname,
            email,
            address,
        } = new_user;
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(Error::new(ErrorCode::UsernameExisted));
        }
        if !is_campus_email(&email) {
            return Err(Error::new(ErrorCode::InvalidEmail));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(Error::new(ErrorCode::EmailExisted));
        }

        let mut user = User::new(username, self.clock.utc());
        user.fullname = fullname;
        user.email = Some(email);
        user.address = address;
        self.users.upsert(&user).await?;
        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Every user. Admin only.
    pub async fn list(&self, ctx: &SecurityContext) -> Result<Vec<User>, Error> {
        ctx.require_admin()?;
        Ok(self.users.list().await?)
    }

    /// A single user. Admin only.
    pub async fn get(&self, ctx: &SecurityContext, id: &UserId) -> Result<User, Error> {
        ctx.require_admin()?;
        self.find(id).await
    }

    /// Profile of the calling user.
    pub async fn my_info(&self, ctx: &SecurityContext) -> Result<User, Error> {
        let username = ctx.current_username()?;
        self.find_by_username(username).await
    }

    /// Update a profile. Callers may edit themselves; admins may edit anyone
    /// and are the only ones allowed to change roles.
    pub async fn update(
        &self,
        ctx: &SecurityContext,
        id: &UserId,
        update: UserUpdate,
    ) -> Result<User, Error> {
        ctx.current_identity()?;
        let mut user = self.find(id).await?;
        ctx.require_self_or_admin(&user.username)?;

        let UserUpdate {
            fullname,
            email,
            roles,
            address,
        } = update;
        if let Some(roles) = roles {
            ctx.require_admin()?;
            user.roles = roles;
        }
        if fullname.is_some() {
            user.fullname = fullname;
        }
        if email.is_some() {
            user.email = email;
        }
        if address.is_some() {
            user.address = address;
        }

        self.users.upsert(&user).await?;
        Ok(user)
    }

    /// Delete a user. Admin only; deleting an unknown id is a no-op.
    pub async fn delete(&self, ctx: &SecurityContext, id: &UserId) -> Result<(), Error> {
        ctx.require_admin()?;
        if self.users.delete(id).await? {
            info!(user_id = %id, "user deleted");
        }
        Ok(())
    }

    pub(crate) async fn find(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))
    }

    pub(crate) async fn find_by_username(&self, username: &str) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(Error::new(ErrorCode::UserNotExist))
    }
}
