use crate::background::{data_loader::DataLoader, BackgroundTaskManager, TaskKind};
use crate::events::AppCommand;
use crate::state::posts::{PostQuery, PostsController};
use crate::state::{AppState, InputMode, LoadingState};

/// Background work a command asks for after updating state
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadTags,
    LoadPosts(PostQuery),
}

/// Execute a command: update state, then spawn whatever it needs loaded
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let Some(effect) = apply_command(command, state) else {
        return;
    };

    match effect {
        Effect::LoadTags => {
            let data_loader = data_loader.clone();
            task_manager.spawn(TaskKind::Tags, async move {
                data_loader.load_tags().await;
            });
        }
        Effect::LoadPosts(query) => {
            let data_loader = data_loader.clone();
            task_manager.spawn(TaskKind::Posts, async move {
                data_loader.load_posts(query).await;
            });
        }
    }
}

/// Apply a command to state and report the background work it requires
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    match command {
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }

        AppCommand::SelectNext => {
            state.posts.select_next();
            None
        }
        AppCommand::SelectPrevious => {
            state.posts.select_prev();
            None
        }

        AppCommand::LoadTags => {
            state.filter_bar.tags_loading = LoadingState::loading();
            Some(Effect::LoadTags)
        }
        AppCommand::LoadPosts => Some(load_posts(state)),

        AppCommand::EnterSearchMode => {
            state.input_mode = InputMode::Search;
            None
        }
        AppCommand::ExitSearchMode => {
            state.input_mode = InputMode::Normal;
            None
        }
        AppCommand::AppendSearchChar(c) => {
            state.filter_bar.push_char(c);
            None
        }
        AppCommand::DeleteSearchChar => {
            state.filter_bar.pop_char();
            None
        }
        AppCommand::ClearSearch => {
            state.filter_bar.clear_input();
            None
        }

        AppCommand::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            let mut controller = PostsController::new(&mut state.posts.query);
            state
                .filter_bar
                .submit_search(&mut controller, &mut state.location);
            reload_if_requested(controller.reload_requested(), state)
        }
        AppCommand::SelectTag(tag) => {
            let mut controller = PostsController::new(&mut state.posts.query);
            state
                .filter_bar
                .select_tag(&tag, &mut controller, &mut state.location);
            reload_if_requested(controller.reload_requested(), state)
        }
        AppCommand::ChangeSortBy(sort_by) => {
            let mut controller = PostsController::new(&mut state.posts.query);
            state
                .filter_bar
                .change_sort_by(&sort_by, &mut controller, &mut state.location);
            reload_if_requested(controller.reload_requested(), state)
        }
        AppCommand::ChangeSortOrder(order) => {
            let mut controller = PostsController::new(&mut state.posts.query);
            state
                .filter_bar
                .change_sort_order(order, &mut controller, &mut state.location);
            reload_if_requested(controller.reload_requested(), state)
        }

        AppCommand::NextPage => {
            let pagination = state.posts.pagination();
            let mut controller = PostsController::new(&mut state.posts.query);
            pagination.next(&mut controller);
            reload_if_requested(controller.reload_requested(), state)
        }
        AppCommand::PreviousPage => {
            let pagination = state.posts.pagination();
            let mut controller = PostsController::new(&mut state.posts.query);
            pagination.previous(&mut controller);
            reload_if_requested(controller.reload_requested(), state)
        }
        AppCommand::ChangePageSize(limit) => {
            let pagination = state.posts.pagination();
            let mut controller = PostsController::new(&mut state.posts.query);
            pagination.change_page_size(limit, &mut controller);
            reload_if_requested(controller.reload_requested(), state)
        }
    }
}

fn reload_if_requested(requested: bool, state: &mut AppState) -> Option<Effect> {
    requested.then(|| load_posts(state))
}

fn load_posts(state: &mut AppState) -> Effect {
    state.posts.posts_loading = LoadingState::loading();
    Effect::LoadPosts(state.posts.query.clone())
}
