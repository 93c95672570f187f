//! Extended (0xCB-prefixed) dispatch table. Every entry is one byte and
//! auto-advances; costs are 4 ticks for register operands and 12 for
//! (HL), on top of the prefix fetch already charged by the base table.

use super::{op, Opcode};
use crate::cpu::exec;

pub static OPCODES_CB: [Opcode; 256] = [
    // 0x00
    op("RLC B", 1, 1, 4, exec::cb_rlc),
    op("RLC C", 1, 1, 4, exec::cb_rlc),
    op("RLC D", 1, 1, 4, exec::cb_rlc),
    op("RLC E", 1, 1, 4, exec::cb_rlc),
    op("RLC H", 1, 1, 4, exec::cb_rlc),
    op("RLC L", 1, 1, 4, exec::cb_rlc),
    op("RLC (HL)", 1, 1, 12, exec::cb_rlc),
    op("RLC A", 1, 1, 4, exec::cb_rlc),
    op("RRC B", 1, 1, 4, exec::cb_rrc),
    op("RRC C", 1, 1, 4, exec::cb_rrc),
    op("RRC D", 1, 1, 4, exec::cb_rrc),
    op("RRC E", 1, 1, 4, exec::cb_rrc),
    op("RRC H", 1, 1, 4, exec::cb_rrc),
    op("RRC L", 1, 1, 4, exec::cb_rrc),
    op("RRC (HL)", 1, 1, 12, exec::cb_rrc),
    op("RRC A", 1, 1, 4, exec::cb_rrc),
    // 0x10
    op("RL B", 1, 1, 4, exec::cb_rl),
    op("RL C", 1, 1, 4, exec::cb_rl),
    op("RL D", 1, 1, 4, exec::cb_rl),
    op("RL E", 1, 1, 4, exec::cb_rl),
    op("RL H", 1, 1, 4, exec::cb_rl),
    op("RL L", 1, 1, 4, exec::cb_rl),
    op("RL (HL)", 1, 1, 12, exec::cb_rl),
    op("RL A", 1, 1, 4, exec::cb_rl),
    op("RR B", 1, 1, 4, exec::cb_rr),
    op("RR C", 1, 1, 4, exec::cb_rr),
    op("RR D", 1, 1, 4, exec::cb_rr),
    op("RR E", 1, 1, 4, exec::cb_rr),
    op("RR H", 1, 1, 4, exec::cb_rr),
    op("RR L", 1, 1, 4, exec::cb_rr),
    op("RR (HL)", 1, 1, 12, exec::cb_rr),
    op("RR A", 1, 1, 4, exec::cb_rr),
    // 0x20
    op("SLA B", 1, 1, 4, exec::cb_sla),
    op("SLA C", 1, 1, 4, exec::cb_sla),
    op("SLA D", 1, 1, 4, exec::cb_sla),
    op("SLA E", 1, 1, 4, exec::cb_sla),
    op("SLA H", 1, 1, 4, exec::cb_sla),
    op("SLA L", 1, 1, 4, exec::cb_sla),
    op("SLA (HL)", 1, 1, 12, exec::cb_sla),
    op("SLA A", 1, 1, 4, exec::cb_sla),
    op("SRA B", 1, 1, 4, exec::cb_sra),
    op("SRA C", 1, 1, 4, exec::cb_sra),
    op("SRA D", 1, 1, 4, exec::cb_sra),
    op("SRA E", 1, 1, 4, exec::cb_sra),
    op("SRA H", 1, 1, 4, exec::cb_sra),
    op("SRA L", 1, 1, 4, exec::cb_sra),
    op("SRA (HL)", 1, 1, 12, exec::cb_sra),
    op("SRA A", 1, 1, 4, exec::cb_sra),
    // 0x30
    op("SWAP B", 1, 1, 4, exec::cb_swap),
    op("SWAP C", 1, 1, 4, exec::cb_swap),
    op("SWAP D", 1, 1, 4, exec::cb_swap),
    op("SWAP E", 1, 1, 4, exec::cb_swap),
    op("SWAP H", 1, 1, 4, exec::cb_swap),
    op("SWAP L", 1, 1, 4, exec::cb_swap),
    op("SWAP (HL)", 1, 1, 12, exec::cb_swap),
    op("SWAP A", 1, 1, 4, exec::cb_swap),
    op("SRL B", 1, 1, 4, exec::cb_srl),
    op("SRL C", 1, 1, 4, exec::cb_srl),
    op("SRL D", 1, 1, 4, exec::cb_srl),
    op("SRL E", 1, 1, 4, exec::cb_srl),
    op("SRL H", 1, 1, 4, exec::cb_srl),
    op("SRL L", 1, 1, 4, exec::cb_srl),
    op("SRL (HL)", 1, 1, 12, exec::cb_srl),
    op("SRL A", 1, 1, 4, exec::cb_srl),
    // 0x40
    op("BIT 0, B", 1, 1, 4, exec::cb_bit),
    op("BIT 0, C", 1, 1, 4, exec::cb_bit),
    op("BIT 0, D", 1, 1, 4, exec::cb_bit),
    op("BIT 0, E", 1, 1, 4, exec::cb_bit),
    op("BIT 0, H", 1, 1, 4, exec::cb_bit),
    op("BIT 0, L", 1, 1, 4, exec::cb_bit),
    op("BIT 0, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 0, A", 1, 1, 4, exec::cb_bit),
    op("BIT 1, B", 1, 1, 4, exec::cb_bit),
    op("BIT 1, C", 1, 1, 4, exec::cb_bit),
    op("BIT 1, D", 1, 1, 4, exec::cb_bit),
    op("BIT 1, E", 1, 1, 4, exec::cb_bit),
    op("BIT 1, H", 1, 1, 4, exec::cb_bit),
    op("BIT 1, L", 1, 1, 4, exec::cb_bit),
    op("BIT 1, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 1, A", 1, 1, 4, exec::cb_bit),
    // 0x50
    op("BIT 2, B", 1, 1, 4, exec::cb_bit),
    op("BIT 2, C", 1, 1, 4, exec::cb_bit),
    op("BIT 2, D", 1, 1, 4, exec::cb_bit),
    op("BIT 2, E", 1, 1, 4, exec::cb_bit),
    op("BIT 2, H", 1, 1, 4, exec::cb_bit),
    op("BIT 2, L", 1, 1, 4, exec::cb_bit),
    op("BIT 2, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 2, A", 1, 1, 4, exec::cb_bit),
    op("BIT 3, B", 1, 1, 4, exec::cb_bit),
    op("BIT 3, C", 1, 1, 4, exec::cb_bit),
    op("BIT 3, D", 1, 1, 4, exec::cb_bit),
    op("BIT 3, E", 1, 1, 4, exec::cb_bit),
    op("BIT 3, H", 1, 1, 4, exec::cb_bit),
    op("BIT 3, L", 1, 1, 4, exec::cb_bit),
    op("BIT 3, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 3, A", 1, 1, 4, exec::cb_bit),
    // 0x60
    op("BIT 4, B", 1, 1, 4, exec::cb_bit),
    op("BIT 4, C", 1, 1, 4, exec::cb_bit),
    op("BIT 4, D", 1, 1, 4, exec::cb_bit),
    op("BIT 4, E", 1, 1, 4, exec::cb_bit),
    op("BIT 4, H", 1, 1, 4, exec::cb_bit),
    op("BIT 4, L", 1, 1, 4, exec::cb_bit),
    op("BIT 4, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 4, A", 1, 1, 4, exec::cb_bit),
    op("BIT 5, B", 1, 1, 4, exec::cb_bit),
    op("BIT 5, C", 1, 1, 4, exec::cb_bit),
    op("BIT 5, D", 1, 1, 4, exec::cb_bit),
    op("BIT 5, E", 1, 1, 4, exec::cb_bit),
    op("BIT 5, H", 1, 1, 4, exec::cb_bit),
    op("BIT 5, L", 1, 1, 4, exec::cb_bit),
    op("BIT 5, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 5, A", 1, 1, 4, exec::cb_bit),
    // 0x70
    op("BIT 6, B", 1, 1, 4, exec::cb_bit),
    op("BIT 6, C", 1, 1, 4, exec::cb_bit),
    op("BIT 6, D", 1, 1, 4, exec::cb_bit),
    op("BIT 6, E", 1, 1, 4, exec::cb_bit),
    op("BIT 6, H", 1, 1, 4, exec::cb_bit),
    op("BIT 6, L", 1, 1, 4, exec::cb_bit),
    op("BIT 6, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 6, A", 1, 1, 4, exec::cb_bit),
    op("BIT 7, B", 1, 1, 4, exec::cb_bit),
    op("BIT 7, C", 1, 1, 4, exec::cb_bit),
    op("BIT 7, D", 1, 1, 4, exec::cb_bit),
    op("BIT 7, E", 1, 1, 4, exec::cb_bit),
    op("BIT 7, H", 1, 1, 4, exec::cb_bit),
    op("BIT 7, L", 1, 1, 4, exec::cb_bit),
    op("BIT 7, (HL)", 1, 1, 12, exec::cb_bit),
    op("BIT 7, A", 1, 1, 4, exec::cb_bit),
    // 0x80
    op("RES 0, B", 1, 1, 4, exec::cb_res),
    op("RES 0, C", 1, 1, 4, exec::cb_res),
    op("RES 0, D", 1, 1, 4, exec::cb_res),
    op("RES 0, E", 1, 1, 4, exec::cb_res),
    op("RES 0, H", 1, 1, 4, exec::cb_res),
    op("RES 0, L", 1, 1, 4, exec::cb_res),
    op("RES 0, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 0, A", 1, 1, 4, exec::cb_res),
    op("RES 1, B", 1, 1, 4, exec::cb_res),
    op("RES 1, C", 1, 1, 4, exec::cb_res),
    op("RES 1, D", 1, 1, 4, exec::cb_res),
    op("RES 1, E", 1, 1, 4, exec::cb_res),
    op("RES 1, H", 1, 1, 4, exec::cb_res),
    op("RES 1, L", 1, 1, 4, exec::cb_res),
    op("RES 1, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 1, A", 1, 1, 4, exec::cb_res),
    // 0x90
    op("RES 2, B", 1, 1, 4, exec::cb_res),
    op("RES 2, C", 1, 1, 4, exec::cb_res),
    op("RES 2, D", 1, 1, 4, exec::cb_res),
    op("RES 2, E", 1, 1, 4, exec::cb_res),
    op("RES 2, H", 1, 1, 4, exec::cb_res),
    op("RES 2, L", 1, 1, 4, exec::cb_res),
    op("RES 2, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 2, A", 1, 1, 4, exec::cb_res),
    op("RES 3, B", 1, 1, 4, exec::cb_res),
    op("RES 3, C", 1, 1, 4, exec::cb_res),
    op("RES 3, D", 1, 1, 4, exec::cb_res),
    op("RES 3, E", 1, 1, 4, exec::cb_res),
    op("RES 3, H", 1, 1, 4, exec::cb_res),
    op("RES 3, L", 1, 1, 4, exec::cb_res),
    op("RES 3, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 3, A", 1, 1, 4, exec::cb_res),
    // 0xA0
    op("RES 4, B", 1, 1, 4, exec::cb_res),
    op("RES 4, C", 1, 1, 4, exec::cb_res),
    op("RES 4, D", 1, 1, 4, exec::cb_res),
    op("RES 4, E", 1, 1, 4, exec::cb_res),
    op("RES 4, H", 1, 1, 4, exec::cb_res),
    op("RES 4, L", 1, 1, 4, exec::cb_res),
    op("RES 4, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 4, A", 1, 1, 4, exec::cb_res),
    op("RES 5, B", 1, 1, 4, exec::cb_res),
    op("RES 5, C", 1, 1, 4, exec::cb_res),
    op("RES 5, D", 1, 1, 4, exec::cb_res),
    op("RES 5, E", 1, 1, 4, exec::cb_res),
    op("RES 5, H", 1, 1, 4, exec::cb_res),
    op("RES 5, L", 1, 1, 4, exec::cb_res),
    op("RES 5, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 5, A", 1, 1, 4, exec::cb_res),
    // 0xB0
    op("RES 6, B", 1, 1, 4, exec::cb_res),
    op("RES 6, C", 1, 1, 4, exec::cb_res),
    op("RES 6, D", 1, 1, 4, exec::cb_res),
    op("RES 6, E", 1, 1, 4, exec::cb_res),
    op("RES 6, H", 1, 1, 4, exec::cb_res),
    op("RES 6, L", 1, 1, 4, exec::cb_res),
    op("RES 6, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 6, A", 1, 1, 4, exec::cb_res),
    op("RES 7, B", 1, 1, 4, exec::cb_res),
    op("RES 7, C", 1, 1, 4, exec::cb_res),
    op("RES 7, D", 1, 1, 4, exec::cb_res),
    op("RES 7, E", 1, 1, 4, exec::cb_res),
    op("RES 7, H", 1, 1, 4, exec::cb_res),
    op("RES 7, L", 1, 1, 4, exec::cb_res),
    op("RES 7, (HL)", 1, 1, 12, exec::cb_res),
    op("RES 7, A", 1, 1, 4, exec::cb_res),
    // 0xC0
    op("SET 0, B", 1, 1, 4, exec::cb_set),
    op("SET 0, C", 1, 1, 4, exec::cb_set),
    op("SET 0, D", 1, 1, 4, exec::cb_set),
    op("SET 0, E", 1, 1, 4, exec::cb_set),
    op("SET 0, H", 1, 1, 4, exec::cb_set),
    op("SET 0, L", 1, 1, 4, exec::cb_set),
    op("SET 0, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 0, A", 1, 1, 4, exec::cb_set),
    op("SET 1, B", 1, 1, 4, exec::cb_set),
    op("SET 1, C", 1, 1, 4, exec::cb_set),
    op("SET 1, D", 1, 1, 4, exec::cb_set),
    op("SET 1, E", 1, 1, 4, exec::cb_set),
    op("SET 1, H", 1, 1, 4, exec::cb_set),
    op("SET 1, L", 1, 1, 4, exec::cb_set),
    op("SET 1, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 1, A", 1, 1, 4, exec::cb_set),
    // 0xD0
    op("SET 2, B", 1, 1, 4, exec::cb_set),
    op("SET 2, C", 1, 1, 4, exec::cb_set),
    op("SET 2, D", 1, 1, 4, exec::cb_set),
    op("SET 2, E", 1, 1, 4, exec::cb_set),
    op("SET 2, H", 1, 1, 4, exec::cb_set),
    op("SET 2, L", 1, 1, 4, exec::cb_set),
    op("SET 2, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 2, A", 1, 1, 4, exec::cb_set),
    op("SET 3, B", 1, 1, 4, exec::cb_set),
    op("SET 3, C", 1, 1, 4, exec::cb_set),
    op("SET 3, D", 1, 1, 4, exec::cb_set),
    op("SET 3, E", 1, 1, 4, exec::cb_set),
    op("SET 3, H", 1, 1, 4, exec::cb_set),
    op("SET 3, L", 1, 1, 4, exec::cb_set),
    op("SET 3, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 3, A", 1, 1, 4, exec::cb_set),
    // 0xE0
    op("SET 4, B", 1, 1, 4, exec::cb_set),
    op("SET 4, C", 1, 1, 4, exec::cb_set),
    op("SET 4, D", 1, 1, 4, exec::cb_set),
    op("SET 4, E", 1, 1, 4, exec::cb_set),
    op("SET 4, H", 1, 1, 4, exec::cb_set),
    op("SET 4, L", 1, 1, 4, exec::cb_set),
    op("SET 4, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 4, A", 1, 1, 4, exec::cb_set),
    op("SET 5, B", 1, 1, 4, exec::cb_set),
    op("SET 5, C", 1, 1, 4, exec::cb_set),
    op("SET 5, D", 1, 1, 4, exec::cb_set),
    op("SET 5, E", 1, 1, 4, exec::cb_set),
    op("SET 5, H", 1, 1, 4, exec::cb_set),
    op("SET 5, L", 1, 1, 4, exec::cb_set),
    op("SET 5, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 5, A", 1, 1, 4, exec::cb_set),
    // 0xF0
    op("SET 6, B", 1, 1, 4, exec::cb_set),
    op("SET 6, C", 1, 1, 4, exec::cb_set),
    op("SET 6, D", 1, 1, 4, exec::cb_set),
    op("SET 6, E", 1, 1, 4, exec::cb_set),
    op("SET 6, H", 1, 1, 4, exec::cb_set),
    op("SET 6, L", 1, 1, 4, exec::cb_set),
    op("SET 6, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 6, A", 1, 1, 4, exec::cb_set),
    op("SET 7, B", 1, 1, 4, exec::cb_set),
    op("SET 7, C", 1, 1, 4, exec::cb_set),
    op("SET 7, D", 1, 1, 4, exec::cb_set),
    op("SET 7, E", 1, 1, 4, exec::cb_set),
    op("SET 7, H", 1, 1, 4, exec::cb_set),
    op("SET 7, L", 1, 1, 4, exec::cb_set),
    op("SET 7, (HL)", 1, 1, 12, exec::cb_set),
    op("SET 7, A", 1, 1, 4, exec::cb_set),
];
