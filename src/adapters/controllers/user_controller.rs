use tracing::info;

use crate::{
    adapters::{notice::Notice, screen::ScreenOutput, state::AppState},
    application::{
        error::ApplicationError,
        services::Confirmer,
        viewmodels::{
            user_detail::UserDetailViewModel,
            user_directory::{DeleteOutcome, UserDirectoryViewModel},
        },
    },
    domain::models::user::User,
};

pub struct UserController;

pub fn user_row(user: &User) -> String {
    format!(
        "{:>5}  {:<16} {} {} <{}> {}",
        user.id, user.username, user.surname, user.name, user.email, user.phone
    )
}

fn detail_lines(detail: &UserDetailViewModel) -> Vec<String> {
    let user = detail.user();
    let mut lines = vec![
        format!("Id: {}", user.id),
        format!("Surname: {}", user.surname),
        format!("Name: {}", user.name),
        format!("Username: {}", user.username),
        format!("Email: {}", user.email),
        format!("Phone: {}", user.phone),
        "Files:".to_string(),
    ];

    if detail.has_no_files() {
        lines.push("  No files available.".to_string());
    } else {
        lines.extend(
            detail
                .files()
                .iter()
                .enumerate()
                .map(|(i, file)| format!("  [{}] {}", i, file.display_name())),
        );
    }
    lines
}

impl UserController {
    /// Directory screen: every user, one row each.
    pub async fn list_users(state: &AppState) -> ScreenOutput {
        let mut directory = UserDirectoryViewModel::new(state.api.clone());
        match directory.refresh().await {
            Ok(0) => ScreenOutput::notice(Notice::info("Users", "No users found.")),
            Ok(_) => ScreenOutput::lines(directory.users().iter().map(user_row).collect()),
            Err(e) => ScreenOutput::notice(e.into()),
        }
    }

    /// Detail screen, optionally with one file's summary opened.
    pub async fn show_user(state: &AppState, user_id: i64, file: Option<usize>) -> ScreenOutput {
        let mut detail = UserDetailViewModel::new(state.api.clone(), user_id);
        if let Err(e) = detail.load().await {
            return ScreenOutput::notice(e.into());
        }

        let mut output = ScreenOutput::lines(detail_lines(&detail));
        if let Some(index) = file {
            match detail.file_summary(index) {
                Some(summary) => {
                    output.lines.push(String::new());
                    output.lines.extend(summary.to_string().lines().map(String::from));
                }
                None => {
                    output = output.with_notice(Notice::error(format!(
                        "User has no file at position {}.",
                        index
                    )))
                }
            }
        }
        output
    }

    /// Loads the directory, deletes one row on confirmation and shows what is left.
    pub async fn delete_user(
        state: &AppState,
        user_id: i64,
        confirmer: &dyn Confirmer,
    ) -> ScreenOutput {
        let mut directory = UserDirectoryViewModel::new(state.api.clone());
        if let Err(e) = directory.refresh().await {
            return ScreenOutput::notice(e.into());
        }

        match directory.delete(user_id, confirmer).await {
            Ok(DeleteOutcome::Deleted) => {
                ScreenOutput::lines(directory.users().iter().map(user_row).collect())
                    .with_notice(Notice::success("User deleted."))
            }
            Ok(DeleteOutcome::Cancelled) => {
                info!("Deletion of user {} cancelled", user_id);
                ScreenOutput::notice(Notice::info("Delete", "Deletion cancelled."))
            }
            Err(e) => ScreenOutput::notice(e.into()),
        }
    }

    /// Loads the user, applies `field=value` edits to the form and saves it.
    pub async fn update_user(
        state: &AppState,
        user_id: i64,
        assignments: &[(String, String)],
    ) -> ScreenOutput {
        let mut detail = UserDetailViewModel::new(state.api.clone(), user_id);
        if let Err(e) = detail.load().await {
            return ScreenOutput::notice(e.into());
        }

        let mut form = detail.edit_form();
        for (field, value) in assignments {
            if !form.set_field(field, value.as_str()) {
                let err = ApplicationError::Validation(format!("Unknown field '{}'.", field));
                return ScreenOutput::notice(err.into());
            }
        }

        match detail.save(form.clone()).await {
            Ok(()) => {
                // The reloaded record is authoritative; say so when it differs from the form.
                let message = if form.matches(detail.user()) {
                    "User data updated.".to_string()
                } else {
                    "User data updated. The server stored different values for some fields."
                        .to_string()
                };
                ScreenOutput::lines(detail_lines(&detail)).with_notice(Notice::success(message))
            }
            Err(e) => ScreenOutput::notice(e.into()),
        }
    }
}
