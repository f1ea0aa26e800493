// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use std::str::FromStr;
use warden::Command;
use warden_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles apply only to actors (system operators), never to the people the
/// system records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: operators with structural authority.
    ///
    /// Admins may perform every operation, including:
    /// - creating, changing and deleting facilities, blocks, cells and rooms
    /// - managing departments, containment links and staff records
    /// - maintaining duty schedules and the weapon registry
    Admin,
    /// Officer role: operators running day-to-day custody.
    ///
    /// Officers may:
    /// - admit, transfer, update and release occupants
    /// - add crime records and medical notes
    /// - register visitors and log visits
    /// - issue and take back weapons
    Officer,
}

impl Role {
    /// Returns the lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Officer => "officer",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "officer" => Ok(Self::Officer),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: '{s}'. Must be 'admin' or 'officer'"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Officer => write!(f, "Officer"),
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions
    /// to the authenticated operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

/// Authenticates an actor from an identifier and a claimed role.
///
/// There is no credential store; any non-blank identifier is accepted.
///
/// # Errors
///
/// Returns an error if the identifier is blank.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Returns the least privileged role allowed to issue a command.
    #[must_use]
    pub const fn required_role(command: &Command) -> Role {
        match command {
            Command::AdmitPrisoner { .. }
            | Command::UpdatePrisoner { .. }
            | Command::TransferPrisoner { .. }
            | Command::ReleasePrisoner { .. }
            | Command::AddCrimeRecord { .. }
            | Command::AddMedicalNote { .. }
            | Command::RegisterVisitor { .. }
            | Command::UpdateVisitor { .. }
            | Command::LogVisit { .. }
            | Command::AssignGun { .. }
            | Command::ReturnGun { .. } => Role::Officer,
            _ => Role::Admin,
        }
    }

    /// Checks if an actor may issue a command.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `command` - The command the actor wants to apply
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the command needs the Admin role
    /// and the actor is an Officer.
    pub fn authorize(actor: &AuthenticatedActor, command: &Command) -> Result<(), AuthError> {
        match (actor.role, Self::required_role(command)) {
            (Role::Admin, _) | (Role::Officer, Role::Officer) => Ok(()),
            (Role::Officer, Role::Admin) => Err(AuthError::Unauthorized {
                action: String::from(command.name()),
                required_role: Role::Admin.to_string(),
            }),
        }
    }
}
