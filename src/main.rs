use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use tasklist::{
    application::{
        services::notifier::{LogNotifier, Notifier},
        usecases::{
            authenticate_user::AuthenticateUserUseCase, create_todo::CreateTodoUseCase,
            delete_todo::DeleteTodoUseCase, get_todo::GetTodoUseCase,
            list_buckets::ListBucketsUseCase, toggle_todo::ToggleTodoUseCase,
            update_todo::UpdateTodoUseCase,
        },
    },
    config::Config,
    infrastructure::repositories::postgres::{PostgresTodoRepository, PostgresUserRepository},
    presentation::http::endpoints::{
        auth::AuthEndpoints, health::HealthEndpoints, root::ApiState, todos::TodoEndpoints,
    },
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(Error::other)?;

    let users = PostgresUserRepository::new(pool.clone());
    let todos = PostgresTodoRepository::new(pool);
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    let state = Arc::new(ApiState {
        auth_usecase: Arc::new(AuthenticateUserUseCase::new(users, config.jwt.clone())),
        create_todo_usecase: Arc::new(CreateTodoUseCase::new(todos.clone(), notifier.clone())),
        get_todo_usecase: Arc::new(GetTodoUseCase::new(todos.clone())),
        update_todo_usecase: Arc::new(UpdateTodoUseCase::new(todos.clone(), notifier.clone())),
        toggle_todo_usecase: Arc::new(ToggleTodoUseCase::new(todos.clone(), notifier.clone())),
        delete_todo_usecase: Arc::new(DeleteTodoUseCase::new(todos.clone(), notifier)),
        list_buckets_usecase: Arc::new(ListBucketsUseCase::new(todos)),
        jwt_config: config.jwt.clone(),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!("Starting server at {}", server_url);

    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            AuthEndpoints::new(state.clone()),
            TodoEndpoints::new(state),
        ),
        "Tasklist API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
