use redis::{AsyncCommands, Client};
use shared::{config::RedisConfig, error::AppResult};

use self::model::{AuthorizationKey, AuthorizedUserId};

pub mod model;

pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> AppResult<Self> {
        let client = Client::open(format!("redis://{}:{}", config.host, config.port))?;
        Ok(Self { client })
    }

    pub async fn set_ex(
        &self,
        key: &AuthorizationKey,
        value: &AuthorizedUserId,
        ttl: u64,
    ) -> AppResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn
            .set_ex(key.inner_ref(), value.to_stored(), ttl)
            .await?;
        Ok(())
    }

    pub async fn get(&self, key: &AuthorizationKey) -> AppResult<Option<AuthorizedUserId>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key.inner_ref()).await?;
        value.map(AuthorizedUserId::from_stored).transpose()
    }

    pub async fn delete(&self, key: &AuthorizationKey) -> AppResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(key.inner_ref()).await?;
        Ok(())
    }
}
