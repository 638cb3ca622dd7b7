use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    image::ImageHostClient,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
        bookmark::BookmarkRepositoryImpl, event::EventRepositoryImpl,
        health::HealthCheckRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, bookmark::BookmarkRepository,
    event::EventRepository, health::HealthCheckRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    bookmark_repository: Arc<dyn BookmarkRepository>,
    image_host_client: Arc<ImageHostClient>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let bookmark_repository = Arc::new(BookmarkRepositoryImpl::new(pool.clone()));
        let image_host_client = Arc::new(ImageHostClient::new(&app_config.image_host));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            event_repository,
            booking_repository,
            bookmark_repository,
            image_host_client,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn bookmark_repository(&self) -> Arc<dyn BookmarkRepository> {
        self.bookmark_repository.clone()
    }

    pub fn image_host_client(&self) -> Arc<ImageHostClient> {
        self.image_host_client.clone()
    }
}
