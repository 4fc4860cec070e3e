#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),  // title
    TaskUpdated(String),  // title
    TaskDeleted(String),  // id
    TaskStatusChanged(String, String), // id, status
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    TaskStatusChangeFailed,
    TaskNotFound(String), // id
    TasksHeader(usize),   // count
    NoTasksFound,
    TasksLoading,
    TasksLoadFailed,
    ConfirmDeleteTask(String), // title
    TitleRequired,
    NoChangesDetected,

    // === FORM MESSAGES ===
    FormHeaderCreate,
    FormHeaderEdit(String), // title
    FormCancelled,

    // === FILTER MESSAGES ===
    FilterChanged(String), // description

    // === ANALYTICS MESSAGES ===
    DashboardHeader,
    TasksByStatusHeader,
    TasksByPriorityHeader,

    // === API MESSAGES ===
    RequestFailed(String, String), // operation, error
    RefreshFailed(String),         // error
    BreakdownFailed(String),       // error
    PingOk(String),                // service message
    PingFailed(String),            // error

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigBackendUrlMissing(String),    // variable name
    ConfigBackendUrlInvalid(String),    // value
    ConfigTimeoutInvalid(String),       // value

    // === SESSION MESSAGES ===
    SessionStarted(String), // base url
    SessionEnded,
    NoTasksToSelect,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptTaskAssignee,
    PromptTaskTags,
    PromptSelectAction,
    PromptSelectTask,
    PromptFilterStatus,
    PromptFilterPriority,
    PromptFilterAssignee,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
