pub mod connectivity;
pub mod db;

pub mod feedback {
    pub mod repository;
}

pub mod order {
    pub mod entity;
    pub mod repository;
}

pub mod product {
    pub mod entity;
    pub mod repository;
}
