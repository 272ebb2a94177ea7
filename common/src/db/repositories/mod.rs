// Repository layer: one named, parameterized operation per use case

pub mod catalog;
pub mod cliente;
pub mod empleado;
pub mod pago;
pub mod pedido;
pub mod producto;
pub mod queries;

pub use catalog::CatalogRepository;
pub use cliente::ClienteRepository;
pub use empleado::EmpleadoRepository;
pub use pago::PagoRepository;
pub use pedido::PedidoRepository;
pub use producto::ProductoRepository;
