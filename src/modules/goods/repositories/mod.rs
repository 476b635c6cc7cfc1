pub mod goods_repository;

pub use goods_repository::GoodsRepository;
