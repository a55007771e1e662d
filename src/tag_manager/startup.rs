use std::net::{SocketAddr, TcpListener};

use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::try_init_db, settings::types::Settings};
use sea_orm::DbConn;
use server::{configure_routes, cors};

pub struct Application {
    address: SocketAddr,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = try_init_db(&settings)
            .await
            .map_err(std::io::Error::other)?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = TcpListener::bind(&address)?;
        let address = listener.local_addr()?;
        let server = run(listener, db, settings.application.allowed_origins)?;

        Ok(Self { address, server })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    db: DbConn,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(cors(&allowed_origins))
            .configure(configure_routes)
            .app_data(Data::new(db.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
