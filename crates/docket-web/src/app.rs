use chrono::Utc;
use docket_core::config::BoardConfig;
use docket_core::draft::Draft;
use docket_core::filter::{
  self,
  CompletionFilter,
  Criteria
};
use docket_core::store::TaskBoard;
use docket_core::task::{
  Label,
  Priority
};
use gloo::console::log;
use yew::{
  Callback,
  Html,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::auth::Identity;
use crate::components::{
  EntryForm,
  FilterPanel,
  SignInGate,
  TaskList
};

const THEME_STORAGE_KEY: &str =
  "docket.theme";
const BOARD_CONFIG_TOML: &str = include_str!(
  "../assets/board.toml"
);

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum ThemeMode {
  Light,
  Dark
}

impl ThemeMode {
  fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark",
      | Self::Dark => "Light"
    }
  }
}

fn load_board_config() -> BoardConfig
{
  match docket_core::config::from_toml_str(
    BOARD_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %error,
        "failed parsing embedded \
         board config; using defaults"
      );
      BoardConfig::default()
    }
  }
}

fn load_theme_mode() -> ThemeMode {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("dark") => ThemeMode::Dark,
    | _ => ThemeMode::Light
  }
}

fn save_theme_mode(theme: ThemeMode) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      THEME_STORAGE_KEY,
      theme.storage_value()
    );
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[function_component(App)]
pub fn app() -> Html {
  let theme =
    use_state(load_theme_mode);
  let config =
    use_state(load_board_config);
  let identity =
    use_state(|| None::<Identity>);

  let defaults = config.defaults;
  let board = use_state(move || {
    TaskBoard::new(defaults)
  });
  let draft = use_state(move || {
    Draft::new(defaults)
  });
  let criteria =
    use_state(Criteria::default);
  let form_error =
    use_state(|| None::<String>);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  let on_sign_in = {
    let identity = identity.clone();
    Callback::from(
      move |signed_in: Identity| {
        ui_debug(
          "auth.signed_in",
          &signed_in.username
        );
        identity.set(Some(signed_in));
      }
    )
  };

  let on_sign_out = {
    let identity = identity.clone();
    let board = board.clone();
    let draft = draft.clone();
    let criteria = criteria.clone();
    let form_error =
      form_error.clone();
    Callback::from(move |_| {
      tracing::info!(
        "signed out; dropping \
         session task state"
      );
      board.set(TaskBoard::new(
        defaults
      ));
      draft
        .set(Draft::new(defaults));
      criteria
        .set(Criteria::default());
      form_error.set(None);
      identity.set(None);
    })
  };

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_| {
      let next = (*theme).next();
      save_theme_mode(next);
      theme.set(next);
    })
  };

  let on_title_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*draft).clone();
        next.title = input.value();
        draft.set(next);
      }
    )
  };

  let on_description_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*draft).clone();
        next.description =
          input.value();
        draft.set(next);
      }
    )
  };

  let on_priority_change = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "priority select event had \
             non-select target"
          );
          return;
        };

        let value = input.value();
        let Some(priority) =
          Priority::from_key(&value)
        else {
          tracing::warn!(
            value = %value,
            "unknown priority key"
          );
          return;
        };

        let mut next =
          (*draft).clone();
        next.priority = priority;
        draft.set(next);
      }
    )
  };

  let on_label_change = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "label select event had \
             non-select target"
          );
          return;
        };

        let value = input.value();
        let Some(label) =
          Label::from_key(&value)
        else {
          tracing::warn!(
            value = %value,
            "unknown label key"
          );
          return;
        };

        let mut next =
          (*draft).clone();
        next.label = label;
        draft.set(next);
      }
    )
  };

  let on_submit = {
    let board = board.clone();
    let draft = draft.clone();
    let form_error =
      form_error.clone();
    Callback::from(move |_| {
      let mut next_board =
        (*board).clone();
      let mut next_draft =
        (*draft).clone();
      let title_missing = next_draft
        .title
        .trim()
        .is_empty();

      match next_board.commit(
        &mut next_draft,
        Utc::now()
      ) {
        | Some(task) => {
          form_error.set(None);
          ui_debug(
            "action.commit",
            &format!(
              "committed task {}",
              task.id
            )
          );
        }
        | None => {
          if title_missing {
            form_error.set(Some(
              "Task title is required"
                .to_string()
            ));
          }
        }
      }

      board.set(next_board);
      draft.set(next_draft);
    })
  };

  let on_edit = {
    let board = board.clone();
    let draft = draft.clone();
    let form_error =
      form_error.clone();
    Callback::from(move |id: u64| {
      let Some(task) =
        (*board).get(id).cloned()
      else {
        tracing::warn!(
          id,
          "edit requested for task \
           not on the board"
        );
        return;
      };

      let mut next =
        (*draft).clone();
      next.begin_edit(&task);
      draft.set(next);
      form_error.set(None);
      ui_debug(
        "action.edit",
        &format!("editing task {id}")
      );
    })
  };

  let on_cancel_edit = {
    let draft = draft.clone();
    let form_error =
      form_error.clone();
    Callback::from(move |_| {
      let mut next =
        (*draft).clone();
      next.cancel_edit(defaults);
      draft.set(next);
      form_error.set(None);
      ui_debug(
        "action.edit_cancel",
        "abandoned pending edit"
      );
    })
  };

  let on_complete = {
    let board = board.clone();
    Callback::from(move |id: u64| {
      let mut next =
        (*board).clone();
      if next
        .complete(id, Utc::now())
      {
        board.set(next);
      }
    })
  };

  let on_delete = {
    let board = board.clone();
    let draft = draft.clone();
    Callback::from(move |id: u64| {
      let mut next =
        (*board).clone();
      if !next.remove(id) {
        return;
      }
      board.set(next);

      if (*draft).editing == Some(id)
      {
        let mut next_draft =
          (*draft).clone();
        next_draft
          .cancel_edit(defaults);
        draft.set(next_draft);
      }
    })
  };

  let on_filter_priority_change = {
    let criteria = criteria.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "priority filter event had \
             non-select target"
          );
          return;
        };

        let value = input.value();
        let mut next = *criteria;
        next.priority =
          Priority::from_key(&value);
        criteria.set(next);
      }
    )
  };

  let on_filter_label_change = {
    let criteria = criteria.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "label filter event had \
             non-select target"
          );
          return;
        };

        let value = input.value();
        let mut next = *criteria;
        next.label =
          Label::from_key(&value);
        criteria.set(next);
      }
    )
  };

  let on_filter_completion_change = {
    let criteria = criteria.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "completion filter event had \
             non-select target"
          );
          return;
        };

        let value = input.value();
        let Some(completion) =
          CompletionFilter::from_key(
            &value
          )
        else {
          tracing::warn!(
            value = %value,
            "unknown completion key"
          );
          return;
        };

        let mut next = *criteria;
        next.completion = completion;
        criteria.set(next);
      }
    )
  };

  let on_clear_filters = {
    let criteria = criteria.clone();
    Callback::from(move |_| {
      criteria
        .set(Criteria::default());
      ui_debug(
        "action.filters_clear",
        "criteria reset to all"
      );
    })
  };

  let visible_tasks = filter::apply(
    board.tasks(),
    &criteria
  );
  let total = board.tasks().len();

  html! {
      <div class={classes!("app", theme.as_class())}>
          {
              if let Some(signed_in) = (*identity).clone() {
                  html! {
                      <div class="workspace">
                          <header class="topbar">
                              <div class="brand">{ "Docket" }</div>
                              <div class="session">
                                  <span class="user">{ format!("Signed in as {}", signed_in.username) }</span>
                                  <button class="btn" onclick={on_toggle_theme.clone()}>{ (*theme).toggle_label() }</button>
                                  <button class="btn" onclick={on_sign_out.clone()}>{ "Sign Out" }</button>
                              </div>
                          </header>
                          <main class="board">
                              <EntryForm
                                  draft={(*draft).clone()}
                                  error={(*form_error).clone()}
                                  on_title_input={on_title_input.clone()}
                                  on_description_input={on_description_input.clone()}
                                  on_priority_change={on_priority_change.clone()}
                                  on_label_change={on_label_change.clone()}
                                  on_submit={on_submit.clone()}
                                  on_cancel_edit={on_cancel_edit.clone()}
                              />
                              <FilterPanel
                                  criteria={*criteria}
                                  on_priority_change={on_filter_priority_change.clone()}
                                  on_label_change={on_filter_label_change.clone()}
                                  on_completion_change={on_filter_completion_change.clone()}
                                  on_clear_filters={on_clear_filters.clone()}
                              />
                              <TaskList
                                  tasks={visible_tasks.clone()}
                                  total={total}
                                  on_edit={on_edit.clone()}
                                  on_complete={on_complete.clone()}
                                  on_delete={on_delete.clone()}
                              />
                          </main>
                      </div>
                  }
              } else {
                  html! {
                      <SignInGate on_sign_in={on_sign_in.clone()} />
                  }
              }
          }
      </div>
  }
}
