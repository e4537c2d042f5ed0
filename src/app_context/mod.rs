use crate::cli::Args;
use crate::storage::cities::InMemoryCityCatalog;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::{ICityCatalog, IGameStorage};
use crate::storage::scores::InMemoryScoreArchive;

#[derive(Clone, Default)]
pub struct AppContext<CS: ICityCatalog, GS: IGameStorage> {
    pub cities: CS,
    pub games: GS,
    pub scores: InMemoryScoreArchive,
}

pub fn init(args: &Args) -> AppContext<InMemoryCityCatalog, HashMapGamesStorage> {
    AppContext {
        cities: InMemoryCityCatalog::load(&args.cities),
        games: HashMapGamesStorage::default(),
        scores: InMemoryScoreArchive::default(),
    }
}
