use crate::{
    adapters::{
        controllers::user_controller::user_row, notice::Notice, screen::ScreenOutput,
        state::AppState,
    },
    application::viewmodels::search::{FileSearchViewModel, SearchOutcome, UserSearchViewModel},
};

pub struct SearchController;

impl SearchController {
    pub async fn search_users(
        state: &AppState,
        query: &str,
        select: Option<usize>,
    ) -> ScreenOutput {
        let mut search = UserSearchViewModel::new(state.api.clone());
        match search.search(query).await {
            Ok(SearchOutcome::Empty) => {
                ScreenOutput::notice(Notice::info("Search results", "No users found."))
            }
            Ok(SearchOutcome::Found(_)) => {
                let mut output =
                    ScreenOutput::lines(search.users().iter().map(user_row).collect());
                if let Some(summary) = select.and_then(|i| search.summary(i)) {
                    output.lines.push(String::new());
                    output.lines.extend(summary.to_string().lines().map(String::from));
                }
                output
            }
            Err(e) => ScreenOutput::notice(e.into()),
        }
    }

    pub async fn search_files(state: &AppState, query: &str) -> ScreenOutput {
        let mut search = FileSearchViewModel::new(state.api.clone());
        match search.search(query).await {
            Ok(SearchOutcome::Empty) => {
                ScreenOutput::notice(Notice::info("Search results", "No files found."))
            }
            Ok(SearchOutcome::Found(_)) => ScreenOutput::lines(
                search
                    .files()
                    .iter()
                    .map(|f| format!("{:<32} {:>10}  {}", f.display_name(), f.size, f.path))
                    .collect(),
            ),
            Err(e) => ScreenOutput::notice(e.into()),
        }
    }
}
