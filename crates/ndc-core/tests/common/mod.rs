//! Shared source rows for ndc-core tests.

#![allow(dead_code)]

use ndc_model::RawRecord;

/// Only the debit-note essentials; every other block stays blank.
pub fn minimal_row() -> RawRecord {
    RawRecord::new()
        .with("cd_Uni_Destino", "1")
        .with("cd_Uni_Origem", "32")
        .with("tp_arquivoNDC", "01")
        .with("nr_Doc_Cob", "1234567890")
        .with("nr_Nota_Debito", "ND-1")
        .with("dt_Emissao_NDC", "25/12/2024")
        .with("dt_Ven_NDC", "2025-01-10")
        .with("vl_NDC", "10,5")
}

/// A row exercising every optional block.
pub fn full_row() -> RawRecord {
    minimal_row()
        .with("nrVerTra_PTU", "3")
        .with("tp_arq_parcial", "1")
        .with("linha_1", "Mensalidade março")
        .with("linha_3", "Coparticipação")
        .with("boleto_nr_Banco", "001")
        .with("boleto_agencia_Cd_Cedente", "1234-5")
        .with("boleto_nosso_Numero", "000123")
        .with("boleto_ds_carteira", "17")
        .with("boleto_dt_proces", "20/12/2024")
        .with("boleto_local_pgto", "Qualquer banco")
        .with("boleto_obs_local_pagto", "Até o vencimento")
        .with("boleto_instrucao_1", "Não receber após 30 dias")
        .with("boleto_observacao_2", "Cobrança & juros")
        .with("boleto_linha_digitavel", "00190.00009 01234.567890")
        .with("boleto_cd_barras", "00191000000000001050")
        .with("doc2_nr_Doc_Cob", "555")
        .with("doc2_nr_Nota_Debito", "ND-2")
        .with("doc2_dt_Emissao_NDC", 45000.0)
        .with("doc2_dt_Ven_NDC", "31/02/2025")
        .with("doc2_vl_NDC", 1234.5)
        .with("credora_nm_credora", "Unimed São José")
        .with("credora_tp_logradouro", "1")
        .with("credora_ds_lograd", "Rua das Flores")
        .with("credora_nr_lograd", "100")
        .with("credora_ds_bairro", "Centro")
        .with("credora_cd_munic", "3550308")
        .with("credora_nr_cep", "01001000")
        .with("credora_cpf_cnpj", "12345678000199")
        .with("credora_nr_ddd", "11")
        .with("credora_nr_fone", "40040000")
        .with("devedora_nm_devedora", "Maria D'Ávila")
        .with("devedora_tp_logradouro", "12")
        .with("devedora_ds_lograd", "Av. Brasil")
        .with("devedora_nr_lograd", "2000")
        .with("devedora_compl_lograd", "Apto 3º")
        .with("devedora_cd_munic", "3304557")
        .with("devedora_nr_cep", "20040002")
        .with("devedora_cpf_cnpj", "12345678901")
        .with("devedora_nr_ddd", "21")
        .with("cmb_dt_postagem", "02/01/2025")
        .with("cmb_nr_protocolo", "PR-99")
}
