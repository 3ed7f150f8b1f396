use super::loader::{parse_map, LoadedMap};
use crate::common::DomainResult;

/// Simplified road map of part of Romania.
pub const ROMANIA: &str = "Romania
20
Arad 91 492
Bucharest 400 327
Craiova 253 288
Dobreta 165 299
Eforie 562 293
Fagaras 305 449
Giurgiu 375 270
Hirsova 534 350
Iasi 473 506
Lugoj 165 379
Mehadia 168 339
Neamt 406 537
Oradea 131 571
Pitesti 320 368
RimnicuVilcea 233 410
Sibiu 207 457
Timisoara 94 410
Urziceni 456 350
Vaslui 509 444
Zerind 108 531
23
Oradea Zerind 71
Oradea Sibiu 151
Zerind Arad 75
Arad Timisoara 118
Arad Sibiu 140
Timisoara Lugoj 111
Lugoj Mehadia 70
Mehadia Dobreta 75
Dobreta Craiova 120
Sibiu Fagaras 99
Sibiu RimnicuVilcea 80
RimnicuVilcea Pitesti 97
RimnicuVilcea Craiova 146
Craiova Pitesti 138
Fagaras Bucharest 211
Pitesti Bucharest 101
Giurgiu Bucharest 90
Bucharest Urziceni 85
Neamt Iasi 87
Urziceni Vaslui 142
Urziceni Hirsova 98
Iasi Vaslui 92
Hirsova Eforie 86
";

/// Maps available before anything is loaded from disk.
pub fn builtin_maps() -> DomainResult<Vec<LoadedMap>> {
    Ok(vec![parse_map(ROMANIA)?])
}
