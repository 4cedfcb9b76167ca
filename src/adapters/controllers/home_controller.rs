use crate::{
    adapters::{screen::ScreenOutput, state::AppState},
    application::viewmodels::home::HomeViewModel,
};

pub struct HomeController;

impl HomeController {
    pub fn home(state: &AppState) -> ScreenOutput {
        let home = HomeViewModel::new(state.session.clone());
        ScreenOutput::lines(vec![home.greeting()])
    }
}
