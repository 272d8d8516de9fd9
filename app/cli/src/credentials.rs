use std::str::FromStr;

use anyhow::Context;
use vdisk_auth::CredentialRecord;
use vdisk_auth::Role;
use vdisk_auth::StaticCredentialStore;
use vdisk_config::UserConfig;

/// Built-in accounts plus the users from the config file. A config user
/// with a built-in name replaces it.
pub fn build_store(users: &[UserConfig]) -> anyhow::Result<StaticCredentialStore> {
    let records = users
        .iter()
        .map(|user| {
            let role = Role::from_str(&user.role).with_context(|| {
                format!("User '{}' has unknown role '{}'", user.username, user.role)
            })?;
            let record = CredentialRecord::from_digest(
                &user.username,
                &user.salt,
                &user.password_sha256,
                role,
            )?;
            Ok(record)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(StaticCredentialStore::builtin().with_records(records))
}

#[cfg(test)]
#[path = "credentials.test.rs"]
mod tests;
