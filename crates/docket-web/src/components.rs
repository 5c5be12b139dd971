use docket_core::draft::Draft;
use docket_core::filter::{CompletionFilter, Criteria};
use docket_core::task::{Label, Priority, Task};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

use crate::auth;
use crate::auth::Identity;

#[derive(Properties, PartialEq)]
pub struct SignInGateProps {
    pub on_sign_in: Callback<Identity>,
}

#[function_component(SignInGate)]
pub fn sign_in_gate(props: &SignInGateProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let on_sign_in = props.on_sign_in.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            match auth::sign_in(&username, &password) {
                Ok(identity) => {
                    username.set(String::new());
                    password.set(String::new());
                    error.set(None);
                    on_sign_in.emit(identity);
                }
                Err(message) => error.set(Some(message)),
            }
        })
    };

    html! {
        <div class="panel gate">
            <div class="header">{ "Sign in to Docket" }</div>
            <form class="details" onsubmit={on_submit}>
                <div class="field">
                    <label>{ "Username" }</label>
                    <input
                        value={(*username).clone()}
                        placeholder="Username"
                        oninput={on_username_input}
                    />
                </div>
                <div class="field">
                    <label>{ "Password" }</label>
                    <input
                        type="password"
                        value={(*password).clone()}
                        placeholder="Password"
                        oninput={on_password_input}
                    />
                </div>
                {
                    if let Some(message) = (*error).clone() {
                        html! { <div class="form-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="actions">
                    <button class="btn primary" type="submit">{ "Sign In" }</button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub draft: Draft,
    pub error: Option<String>,
    pub on_title_input: Callback<web_sys::InputEvent>,
    pub on_description_input: Callback<web_sys::InputEvent>,
    pub on_priority_change: Callback<web_sys::Event>,
    pub on_label_change: Callback<web_sys::Event>,
    pub on_submit: Callback<web_sys::MouseEvent>,
    pub on_cancel_edit: Callback<web_sys::MouseEvent>,
}

#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let editing = props.draft.is_editing();
    let submit_label = if editing { "Save Changes" } else { "Add Task" };

    html! {
        <div class="panel entry">
            <div class="header">{ if editing { "Edit Task" } else { "New Task" } }</div>
            <div class="details">
                <div class="field">
                    <label>{ "Title" }</label>
                    <input
                        value={props.draft.title.clone()}
                        placeholder="Task Title"
                        oninput={props.on_title_input.clone()}
                    />
                </div>
                <div class="field">
                    <label>{ "Description" }</label>
                    <input
                        value={props.draft.description.clone()}
                        placeholder="Description"
                        oninput={props.on_description_input.clone()}
                    />
                </div>
                <div class="field">
                    <label>{ "Priority" }</label>
                    <select
                        class="tag-select"
                        value={props.draft.priority.as_key()}
                        onchange={props.on_priority_change.clone()}
                    >
                        {
                            for Priority::all().iter().map(|priority| html! {
                                <option
                                    value={priority.as_key()}
                                    selected={*priority == props.draft.priority}
                                >
                                    { priority.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="field">
                    <label>{ "Label" }</label>
                    <select
                        class="tag-select"
                        value={props.draft.label.as_key()}
                        onchange={props.on_label_change.clone()}
                    >
                        {
                            for Label::all().iter().map(|label| html! {
                                <option
                                    value={label.as_key()}
                                    selected={*label == props.draft.label}
                                >
                                    { label.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                {
                    if let Some(message) = props.error.clone() {
                        html! { <div class="form-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="actions">
                    <button class="btn primary" onclick={props.on_submit.clone()}>{ submit_label }</button>
                    {
                        if editing {
                            html! {
                                <button class="btn" onclick={props.on_cancel_edit.clone()}>{ "Cancel" }</button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub criteria: Criteria,
    pub on_priority_change: Callback<web_sys::Event>,
    pub on_label_change: Callback<web_sys::Event>,
    pub on_completion_change: Callback<web_sys::Event>,
    pub on_clear_filters: Callback<web_sys::MouseEvent>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let priority_value = props
        .criteria
        .priority
        .map(Priority::as_key)
        .unwrap_or("");
    let label_value = props.criteria.label.map(Label::as_key).unwrap_or("");

    html! {
        <div class="panel filters">
            <div class="header">{ "Filters" }</div>
            <div class="details">
                <div class="field">
                    <label>{ "Priority" }</label>
                    <select
                        class="tag-select"
                        value={priority_value}
                        onchange={props.on_priority_change.clone()}
                    >
                        <option value="">{ "All Priorities" }</option>
                        {
                            for Priority::all().iter().map(|priority| html! {
                                <option
                                    value={priority.as_key()}
                                    selected={Some(*priority) == props.criteria.priority}
                                >
                                    { priority.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="field">
                    <label>{ "Label" }</label>
                    <select
                        class="tag-select"
                        value={label_value}
                        onchange={props.on_label_change.clone()}
                    >
                        <option value="">{ "All Labels" }</option>
                        {
                            for Label::all().iter().map(|label| html! {
                                <option
                                    value={label.as_key()}
                                    selected={Some(*label) == props.criteria.label}
                                >
                                    { label.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="field">
                    <label>{ "Completion" }</label>
                    <select
                        class="tag-select"
                        value={props.criteria.completion.as_key()}
                        onchange={props.on_completion_change.clone()}
                    >
                        {
                            for CompletionFilter::all().iter().map(|filter| html! {
                                <option
                                    value={filter.as_key()}
                                    selected={*filter == props.criteria.completion}
                                >
                                    { filter.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="actions">
                    <button
                        class="btn"
                        disabled={props.criteria.is_unfiltered()}
                        onclick={props.on_clear_filters.clone()}
                    >
                        { "Clear Filters" }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub on_edit: Callback<u64>,
    pub on_complete: Callback<u64>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    let header = if props.tasks.len() == props.total {
        format!("Tasks ({})", props.total)
    } else {
        format!("Tasks ({} of {})", props.tasks.len(), props.total)
    };

    html! {
        <div class="panel list">
            <div class="header">{ header }</div>
            {
                if props.tasks.is_empty() {
                    html! { <div class="empty">{ "No tasks to show." }</div> }
                } else {
                    html! {
                        { for props.tasks.iter().cloned().map(|task| html! {
                            <TaskListRow
                                task={task}
                                on_edit={props.on_edit.clone()}
                                on_complete={props.on_complete.clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        }) }
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
    pub task: Task,
    pub on_edit: Callback<u64>,
    pub on_complete: Callback<u64>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskListRow)]
pub fn task_list_row(props: &TaskListRowProps) -> Html {
    let id = props.task.id;
    let dot_class = if props.task.completed() {
        "dot done"
    } else {
        "dot pending"
    };
    let has_description = !props.task.description.trim().is_empty();

    let on_edit = props.on_edit.clone();
    let on_complete = props.on_complete.clone();
    let on_delete = props.on_delete.clone();

    html! {
        <div class="row">
            <div class={dot_class}></div>
            <div class="body">
                <div class="title">{ &props.task.title }</div>
                {
                    if has_description {
                        html! { <div class="task-subtitle">{ &props.task.description }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="meta">
                    <span class="badge">{ format!("priority:{}", props.task.priority.as_key()) }</span>
                    <span class="badge">{ format!("label:{}", props.task.label.as_key()) }</span>
                    <span class="badge">{ format!("added:{}", props.task.added_at.format("%Y-%m-%d %H:%M")) }</span>
                    {
                        if let Some(completed_at) = props.task.completed_at {
                            html! {
                                <span class="badge done">{ format!("completed:{}", completed_at.format("%Y-%m-%d %H:%M")) }</span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="actions">
                {
                    if props.task.completed() {
                        html! {}
                    } else {
                        html! {
                            <button class="btn" onclick={move |_| on_complete.emit(id)}>{ "Complete" }</button>
                        }
                    }
                }
                <button class="btn" onclick={move |_| on_edit.emit(id)}>{ "Edit" }</button>
                <button class="btn danger" onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
            </div>
        </div>
    }
}
